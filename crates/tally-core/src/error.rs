//! Core error types and their user-facing classification.

use std::fmt;

use tally_git::GitError;
use tally_store::StoreError;
use thiserror::Error;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// State file error.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Git error.
    #[error(transparent)]
    Git(#[from] GitError),
}

impl CoreError {
    /// Returns the reporting category of this error.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Store(StoreError::NotFound { .. }) => ErrorCategory::File,
            Self::Store(StoreError::InvalidFormat { .. } | StoreError::Overflow { .. }) => {
                ErrorCategory::Value
            }
            Self::Git(_) => ErrorCategory::Runtime,
            Self::Store(StoreError::Write { .. }) => ErrorCategory::Unexpected,
        }
    }
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// How a failed run is reported.
///
/// Only [`ErrorCategory::Unexpected`] changes the exit status; the three
/// anticipated kinds print their message and exit successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The state file is missing or unreadable.
    File,
    /// The stored value is not a valid counter.
    Value,
    /// Staging or committing failed.
    Runtime,
    /// Anything else.
    Unexpected,
}

impl ErrorCategory {
    /// Returns the label printed before the error message.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::File => "File error",
            Self::Value => "Value error",
            Self::Runtime => "Runtime error",
            Self::Unexpected => "Unexpected error",
        }
    }

    /// Returns the process exit code for this category.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::File | Self::Value | Self::Runtime => 0,
            Self::Unexpected => 1,
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
