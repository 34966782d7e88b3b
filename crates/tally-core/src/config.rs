//! Run settings.

use std::path::Path;

use tally_store::StateFile;

/// Where a run reads its counter and commits from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    state_file: StateFile,
}

impl Settings {
    /// Creates settings for the default state file inside `dir`.
    #[must_use]
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            state_file: StateFile::in_dir(dir),
        }
    }

    /// Returns the state file.
    #[must_use]
    pub fn state_file(&self) -> &StateFile {
        &self.state_file
    }

    /// Returns the directory git runs in: the one holding the state file.
    #[must_use]
    pub fn workdir(&self) -> &Path {
        match self.state_file.path().parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}
