//! Store error types

use thiserror::Error;

/// Errors that can occur in persistence operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// No listing with the given id
    #[error("listing not found: {0}")]
    NotFound(i64),

    /// Underlying database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
