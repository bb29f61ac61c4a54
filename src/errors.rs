use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for the roster, derivation, and persistence layers.
#[derive(Debug, Error)]
pub enum BirthdayError {
    #[error("Invalid record #{index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, BirthdayError>;

impl From<std::io::Error> for BirthdayError {
    fn from(err: std::io::Error) -> Self {
        BirthdayError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for BirthdayError {
    fn from(err: serde_json::Error) -> Self {
        BirthdayError::StorageError(err.to_string())
    }
}
