//! Store error types.

use mongodb::error::ErrorKind;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid document id: {0}")]
    InvalidId(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] mongodb::bson::ser::Error),

    #[error("Driver error: {0}")]
    Driver(#[from] mongodb::error::Error),
}

impl StoreError {
    /// Transient connectivity failures worth retrying.
    pub fn is_retryable(&self) -> bool {
        match self {
            StoreError::Driver(e) => {
                matches!(*e.kind, ErrorKind::Io(_) | ErrorKind::ServerSelection { .. })
                    || e.contains_label("RetryableWriteError")
            }
            _ => false,
        }
    }
}
