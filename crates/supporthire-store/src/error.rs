//! Error types for the submission store.

use supporthire_forms::SinkError;

/// Errors that can occur while storing or reading submissions.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A stored row does not hold a valid submission document.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// The store configuration could not be resolved.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

impl From<StoreError> for SinkError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Database(
                err @ (sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)),
            ) => Self::Unavailable(err.to_string()),
            StoreError::Database(err) => Self::other(err),
            StoreError::Serialization(err) => Self::Serialization(err),
            StoreError::InvalidDocument(message) => Self::Rejected(message),
            StoreError::Config(message) => Self::Unavailable(message),
        }
    }
}
