//! Error types for bulk writes.

use thiserror::Error;

/// Bulk-write errors.
///
/// Statement compilation is pure and cannot fail; only the delegated
/// execution step can, and the underlying sqlx error passes through
/// unchanged.
#[derive(Debug, Error)]
pub enum BulkError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type alias for bulk-write operations.
pub type Result<T> = std::result::Result<T, BulkError>;
