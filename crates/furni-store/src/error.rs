//! Storage error types.

use thiserror::Error;

/// Errors that can occur in storage operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing store failed to read or write (quota, I/O,
    /// storage disabled).
    #[error("Storage backend error: {0}")]
    Backend(String),

    /// A value could not be serialized to JSON.
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl StoreError {
    /// Whether the error came from the backend rather than from
    /// (de)serialization.
    pub fn is_backend(&self) -> bool {
        matches!(self, StoreError::Backend(_))
    }
}
