//! Git error types.

use std::process::ExitStatus;

use thiserror::Error;

/// Git-related errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// The git executable could not be started.
    #[error("git command failed: cannot run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Git ran but reported failure.
    #[error("git command failed: `{command}` returned {status}")]
    CommandFailed { command: String, status: ExitStatus },
}

/// Result type for git operations.
pub type GitResult<T> = Result<T, GitError>;
