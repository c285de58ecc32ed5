use reqwest::StatusCode;
use thiserror::Error;

/// Message shown when a failed response carries no `error.message`.
pub const GENERIC_FAILURE: &str = "Graph API request failed";

#[derive(Error, Debug)]
pub enum Error {
    /// The API answered with a non-success status.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// The request never completed.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid JSON in response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Transport(e) => e.status(),
            Error::Decode(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
