//! CLI definition.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tally_core::Settings;
use tally_git::GitCli;
use tracing::{debug, info};

/// Increment the counter in `number.txt` next to this executable and commit it.
#[derive(Debug, Parser)]
#[command(name = "tally")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Accepted and ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    ignored: Vec<OsString>,
}

impl Cli {
    /// Runs one increment-and-commit cycle.
    pub fn run(self) -> Result<()> {
        if !self.ignored.is_empty() {
            debug!(args = ?self.ignored, "ignoring command-line arguments");
        }

        let dir = executable_dir()?;
        debug!(dir = %dir.display(), "resolved executable directory");

        let settings = Settings::from_dir(&dir);
        let git = GitCli::new(settings.workdir());

        let outcome = tally_core::run(&settings, git)?;
        info!(counter = %outcome.counter, message = %outcome.message, "run completed");

        Ok(())
    }
}

/// Returns the directory holding the running executable, symlinks resolved.
fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot locate the tally executable")?;
    let exe = exe
        .canonicalize()
        .with_context(|| format!("cannot resolve {}", exe.display()))?;

    exe.parent()
        .map(Path::to_path_buf)
        .context("the tally executable has no parent directory")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_without_arguments() {
        assert!(Cli::try_parse_from(["tally"]).is_ok());
    }

    #[test]
    fn test_ignores_extra_arguments() {
        let cli = Cli::try_parse_from(["tally", "now", "--count", "3"]).unwrap();
        assert_eq!(cli.ignored, ["now", "--count", "3"].map(OsString::from));
    }

    #[test]
    fn test_ignores_leading_unknown_flag() {
        let cli = Cli::try_parse_from(["tally", "--dry-run"]).unwrap();
        assert_eq!(cli.ignored, [OsString::from("--dry-run")]);
    }

    #[test]
    fn test_version_still_recognized() {
        let err = Cli::try_parse_from(["tally", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_executable_dir_is_absolute() {
        let dir = executable_dir().unwrap();
        assert!(dir.is_absolute());
        assert!(dir.is_dir());
    }
}
