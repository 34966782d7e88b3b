//! Counter update.

use tally_store::{Counter, StateFile, StoreError};
use tracing::info;

use crate::CoreResult;

/// Reads the counter in `state`, increments it by one and writes it back.
///
/// Returns the new value. The write only happens after a successful read.
///
/// # Errors
///
/// Returns an error if the counter cannot be read or written, or if it is
/// already at its maximum value.
pub fn increment_and_persist(state: &StateFile) -> CoreResult<Counter> {
    let current = state.read()?;
    let next = current.checked_next().ok_or_else(|| StoreError::Overflow {
        path: state.path().to_path_buf(),
    })?;

    state.write(next)?;
    info!(%current, %next, "incremented counter");

    Ok(next)
}
