mod config;
mod error;
mod inner;
pub mod model;

pub use config::RequestConfig;
pub use error::{Error, Result, GENERIC_FAILURE};
pub use inner::{API, PAGE_POST_FIELDS, USER_FIELDS};

pub use reqwest;
pub use serde_json;
