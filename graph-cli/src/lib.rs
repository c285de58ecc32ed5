pub mod controller;
pub mod helper;
pub mod page;
pub mod render;
pub mod utils;

pub mod stdio;
