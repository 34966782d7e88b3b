//! Git commit publishing for Tally.
//!
//! This crate provides:
//! - The [`VersionControl`] abstraction over staging and committing
//! - [`GitCli`], which drives the `git` executable
//! - [`CommitPublisher`], which stages the state file and commits it with a
//!   date-stamped message

mod error;
mod publisher;
mod vcs;

pub use error::{GitError, GitResult};
pub use publisher::{COMMIT_MESSAGE_PREFIX, CommitPublisher, commit_message};
pub use vcs::{GitCli, VersionControl};
