//! Failure reporting.

use std::process::ExitCode;

use tally_core::{CoreError, ErrorCategory};

/// Returns the reporting category of a failed run.
pub fn category(err: &anyhow::Error) -> ErrorCategory {
    err.downcast_ref::<CoreError>()
        .map_or(ErrorCategory::Unexpected, CoreError::category)
}

/// Renders the single line printed for a failed run.
pub fn render(err: &anyhow::Error) -> String {
    match err.downcast_ref::<CoreError>() {
        // Core errors already carry their cause in the message
        Some(core) => format!("{}: {core}", core.category()),
        None => format!("{}: {err:#}", ErrorCategory::Unexpected),
    }
}

/// Prints the failure line to stdout and returns the matching exit code.
pub fn report(err: &anyhow::Error) -> ExitCode {
    println!("{}", render(err));
    ExitCode::from(category(err).exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::fs;
    use std::io;
    use tally_core::Settings;
    use tally_git::GitError;
    use tempfile::TempDir;

    fn failed_update(content: Option<&str>) -> (TempDir, anyhow::Error) {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::from_dir(temp_dir.path());
        if let Some(content) = content {
            fs::write(settings.state_file().path(), content).unwrap();
        }
        let err = tally_core::increment_and_persist(settings.state_file()).unwrap_err();
        (temp_dir, err.into())
    }

    #[test]
    fn test_missing_file() {
        let (_temp_dir, err) = failed_update(None);
        assert_eq!(category(&err), ErrorCategory::File);
        assert!(render(&err).starts_with("File error: cannot read "));
    }

    #[test]
    fn test_invalid_value() {
        let (_temp_dir, err) = failed_update(Some("12a"));
        assert_eq!(category(&err), ErrorCategory::Value);

        let line = render(&err);
        assert!(line.starts_with("Value error: content of "));
        assert!(line.ends_with(r#"is not a valid number: "12a""#));
    }

    #[test]
    fn test_git_failure() {
        let err: anyhow::Error = CoreError::from(GitError::Spawn {
            command: "git add number.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        })
        .into();

        assert_eq!(category(&err), ErrorCategory::Runtime);
        assert_eq!(
            render(&err),
            "Runtime error: git command failed: cannot run `git add number.txt`: No such file or directory"
        );
    }

    #[test]
    fn test_unexpected_error() {
        let err = Err::<(), _>(io::Error::other("boom"))
            .context("cannot locate the tally executable")
            .unwrap_err();

        assert_eq!(category(&err), ErrorCategory::Unexpected);
        assert_eq!(
            render(&err),
            "Unexpected error: cannot locate the tally executable: boom"
        );
    }

    #[test]
    fn test_exit_codes() {
        let (_temp_dir, err) = failed_update(Some("abc"));
        assert_eq!(category(&err).exit_code(), 0);

        let err = anyhow::anyhow!("boom");
        assert_eq!(category(&err).exit_code(), 1);
    }
}
