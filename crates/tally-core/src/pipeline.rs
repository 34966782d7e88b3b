//! The increment-then-commit run.

use chrono::NaiveDate;
use tally_git::{CommitPublisher, VersionControl};
use tally_store::Counter;
use tracing::debug;

use crate::{CoreResult, Settings, increment_and_persist};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// The counter value now stored.
    pub counter: Counter,
    /// The message of the created commit.
    pub message: String,
}

/// Increments the counter and commits the state file, dated today.
///
/// # Errors
///
/// Returns the first error encountered. Nothing is committed if the counter
/// update fails; a failed commit leaves the updated file in place.
pub fn run<V: VersionControl>(settings: &Settings, vcs: V) -> CoreResult<RunOutcome> {
    let state = settings.state_file();
    debug!(path = %state.path().display(), "starting run");

    let counter = increment_and_persist(state)?;
    let message = CommitPublisher::new(vcs).publish(state.path())?;

    Ok(RunOutcome { counter, message })
}

/// Same as [`run`], with the commit stamped with `date`.
///
/// # Errors
///
/// See [`run`].
pub fn run_on<V: VersionControl>(
    settings: &Settings,
    vcs: V,
    date: NaiveDate,
) -> CoreResult<RunOutcome> {
    let state = settings.state_file();
    debug!(path = %state.path().display(), "starting run");

    let counter = increment_and_persist(state)?;
    let message = CommitPublisher::new(vcs).publish_on(state.path(), date)?;

    Ok(RunOutcome { counter, message })
}
