//! Error types for setlist.
//!
//! Scoring and recommendation never fail on well-typed input; missing data
//! degrades to neutral scores instead. Errors only arise when configuring
//! the engines.

use thiserror::Error;

/// Result type alias using setlist's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for setlist operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Similarity weights cannot be normalized
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// Configuration error (e.g. unparsable environment override)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
