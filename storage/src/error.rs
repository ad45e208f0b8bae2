//! Storage error types.
//!
//! Used by the message store, the repository trait and callers of storage APIs.

use thiserror::Error;

/// Errors that can occur when using storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Not found: message {0}")]
    NotFound(i64),
    #[error("Already exists: message {0}")]
    AlreadyExists(i64),
    #[error("Config error: {0}")]
    Config(String),
}

impl StorageError {
    /// True for the "no row with that id" outcome of a delete.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound(_))
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        StorageError::Database(err.to_string())
    }
}
