//! Error types for snippet store operations.
//!
//! A miss (no snippet under the requested keyword) is not an error; store
//! operations model it as `Option`/empty `Vec`. The variants here cover
//! genuine persistence faults only.

use thiserror::Error;

/// Errors that can occur during snippet store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// SQLite database operation failure.
    #[error("database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),
}

/// Convenience alias for results with [`StoreError`].
pub type Result<T> = std::result::Result<T, StoreError>;
