//! Storage error types.

use thiserror::Error;

/// Storage-specific errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No record exists for the identifier.
    #[error("record not found: {id}")]
    NotFound { id: String },

    /// The identifier cannot be used as a lookup key.
    #[error("invalid record id: {id:?}")]
    InvalidId { id: String },

    /// The backend could not be reached or answered with a failure status.
    #[error("transport error fetching {id}: {message}")]
    Transport { id: String, message: String },

    /// The backend answered, but the body is not a JSON record.
    #[error("invalid response for {id}: {message}")]
    InvalidResponse { id: String, message: String },

    /// A fixture file does not have the expected layout.
    #[error("invalid fixture: {message}")]
    InvalidFixture { message: String },

    /// Reading a fixture file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
