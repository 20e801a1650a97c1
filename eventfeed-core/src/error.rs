//! Error types for eventfeed.

use thiserror::Error;

/// Errors that can occur while validating events or building a feed.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Invalid ISO datetime for '{field}': {value:?}")]
    Parse { field: &'static str, value: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::Serialization(err.to_string())
    }
}

/// Result type alias for eventfeed operations.
pub type FeedResult<T> = Result<T, FeedError>;
