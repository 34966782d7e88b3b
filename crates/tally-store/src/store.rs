//! State file reading and writing.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Counter, ParseCounterError, StoreError, StoreResult};

/// Default state file name.
pub const STATE_FILE_NAME: &str = "number.txt";

/// Reads the counter from the state file at `path`.
///
/// Leading and trailing whitespace is ignored. The file is never modified.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist or cannot be read
/// - The trimmed content is empty, not valid UTF-8, or contains a non-digit
/// - The value does not fit the counter range
pub fn read_counter(path: &Path) -> StoreResult<Counter> {
    debug!(path = %path.display(), "reading counter");

    let bytes = fs::read(path).map_err(|source| StoreError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let content = String::from_utf8(bytes).map_err(|e| StoreError::InvalidFormat {
        path: path.to_path_buf(),
        content: String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })?;

    let trimmed = content.trim();
    trimmed.parse::<Counter>().map_err(|e| match e {
        ParseCounterError::Empty | ParseCounterError::InvalidDigit => {
            StoreError::InvalidFormat {
                path: path.to_path_buf(),
                content: trimmed.to_string(),
            }
        }
        ParseCounterError::Overflow => StoreError::Overflow {
            path: path.to_path_buf(),
        },
    })
}

/// Replaces the content of the state file at `path` with `value`.
///
/// The value is written as plain decimal digits with no trailing newline.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_counter(path: &Path, value: Counter) -> StoreResult<()> {
    debug!(path = %path.display(), %value, "writing counter");

    fs::write(path, value.to_string()).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// A counter state file at a fixed location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    /// Creates a handle for the state file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a handle for [`STATE_FILE_NAME`] inside `dir`.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(STATE_FILE_NAME))
    }

    /// Returns the state file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored counter.
    ///
    /// # Errors
    ///
    /// See [`read_counter`].
    pub fn read(&self) -> StoreResult<Counter> {
        read_counter(&self.path)
    }

    /// Replaces the stored counter.
    ///
    /// # Errors
    ///
    /// See [`write_counter`].
    pub fn write(&self, value: Counter) -> StoreResult<()> {
        write_counter(&self.path, value)
    }
}
