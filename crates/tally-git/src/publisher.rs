//! Date-stamped commit publishing.

use std::path::Path;

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::{GitResult, VersionControl};

/// Prefix of every commit message Tally creates.
pub const COMMIT_MESSAGE_PREFIX: &str = "Update number";

/// Builds the commit message for `date`, e.g. `Update number: 2024-03-07`.
#[must_use]
pub fn commit_message(date: NaiveDate) -> String {
    format!("{COMMIT_MESSAGE_PREFIX}: {}", date.format("%Y-%m-%d"))
}

/// Stages a file and commits it with a date-stamped message.
#[derive(Debug)]
pub struct CommitPublisher<V> {
    vcs: V,
}

impl<V: VersionControl> CommitPublisher<V> {
    /// Creates a publisher backed by `vcs`.
    #[must_use]
    pub fn new(vcs: V) -> Self {
        Self { vcs }
    }

    /// Stages `path` and commits it, stamped with today's local date.
    ///
    /// Returns the commit message used.
    ///
    /// # Errors
    ///
    /// Returns an error if staging or committing fails. A failed commit may
    /// leave `path` staged.
    pub fn publish(&self, path: &Path) -> GitResult<String> {
        self.publish_on(path, Local::now().date_naive())
    }

    /// Stages `path` and commits it, stamped with `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if staging or committing fails.
    pub fn publish_on(&self, path: &Path, date: NaiveDate) -> GitResult<String> {
        self.vcs.stage(path)?;

        let message = commit_message(date);
        self.vcs.commit(&message)?;

        info!(%message, "created commit");
        Ok(message)
    }
}
