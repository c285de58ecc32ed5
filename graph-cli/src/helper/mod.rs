pub mod batch;
pub mod ctx;
pub mod single;
pub mod utils;
