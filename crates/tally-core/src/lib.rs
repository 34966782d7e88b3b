//! Core library for Tally.
//!
//! This crate wires the state store and the commit publisher together:
//! increment the stored counter, then commit the state file.

mod config;
mod error;
mod pipeline;
mod updater;

pub use config::Settings;
pub use error::{CoreError, CoreResult, ErrorCategory};
pub use pipeline::{RunOutcome, run, run_on};
pub use updater::increment_and_persist;
