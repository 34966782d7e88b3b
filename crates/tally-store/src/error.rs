//! State store error types.

use std::path::PathBuf;

use thiserror::Error;

/// State file errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The state file does not exist or cannot be read.
    #[error("cannot read {}: {source}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The state file does not hold a non-negative decimal integer.
    #[error("content of {} is not a valid number: {content:?}", path.display())]
    InvalidFormat { path: PathBuf, content: String },

    /// The stored value does not fit the counter range.
    #[error("value in {} exceeds the counter range", path.display())]
    Overflow { path: PathBuf },

    /// The state file cannot be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for state store operations.
pub type StoreResult<T> = Result<T, StoreError>;
