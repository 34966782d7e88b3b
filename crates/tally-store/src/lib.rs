//! Counter state file storage for Tally.
//!
//! This crate provides:
//! - The [`Counter`] value type and its strict decimal parsing
//! - Reading and writing the counter state file

mod counter;
mod error;
mod store;

pub use counter::{Counter, ParseCounterError};
pub use error::{StoreError, StoreResult};
pub use store::{STATE_FILE_NAME, StateFile, read_counter, write_counter};
