//! Version control abstraction.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::{GitError, GitResult};

/// The two version control operations Tally needs.
pub trait VersionControl {
    /// Stages the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be staged.
    fn stage(&self, path: &Path) -> GitResult<()>;

    /// Commits the currently staged changes with `message`.
    ///
    /// # Errors
    ///
    /// Returns an error if the commit cannot be created.
    fn commit(&self, message: &str) -> GitResult<()>;
}

impl<V: VersionControl + ?Sized> VersionControl for &V {
    fn stage(&self, path: &Path) -> GitResult<()> {
        (**self).stage(path)
    }

    fn commit(&self, message: &str) -> GitResult<()> {
        (**self).commit(message)
    }
}

/// Drives the `git` executable found on the search path.
///
/// Every invocation runs in an explicit working directory, so the process's
/// own current directory is never changed.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
    workdir: PathBuf,
}

impl GitCli {
    /// Creates a git driver operating in `workdir`.
    #[must_use]
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            program: OsString::from("git"),
            workdir: workdir.into(),
        }
    }

    /// Overrides the executable used instead of `git`.
    #[cfg(test)]
    #[must_use]
    fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    /// Runs the program with `args` and waits for it to finish.
    fn run(&self, args: &[&OsStr]) -> GitResult<()> {
        let command = self.describe(args);
        debug!(%command, workdir = %self.workdir.display(), "running git");

        let status = Command::new(&self.program)
            .args(args)
            .current_dir(&self.workdir)
            .status()
            .map_err(|source| GitError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !status.success() {
            warn!(%command, %status, "git exited unsuccessfully");
            return Err(GitError::CommandFailed { command, status });
        }

        Ok(())
    }

    fn describe(&self, args: &[&OsStr]) -> String {
        std::iter::once(self.program.as_os_str())
            .chain(args.iter().copied())
            .map(OsStr::to_string_lossy)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl VersionControl for GitCli {
    fn stage(&self, path: &Path) -> GitResult<()> {
        // Keep the pathspec short when the file lives under the working directory
        let pathspec = path.strip_prefix(&self.workdir).unwrap_or(path);
        self.run(&[OsStr::new("add"), pathspec.as_os_str()])
    }

    fn commit(&self, message: &str) -> GitResult<()> {
        self.run(&[OsStr::new("commit"), OsStr::new("-m"), OsStr::new(message)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::Repository;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, Repository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = Repository::init(temp_dir.path()).unwrap();

        // Configure user for commits
        let mut config = repo.config().unwrap();
        config.set_str("user.name", "Test User").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();
        config.set_bool("commit.gpgsign", false).unwrap();

        (temp_dir, repo)
    }

    fn head_message(repo: &Repository) -> String {
        let commit = repo.head().unwrap().peel_to_commit().unwrap();
        commit.message().unwrap_or_default().trim_end().to_string()
    }

    #[test]
    fn test_new_defaults_to_git() {
        let git = GitCli::new("/repo");
        assert_eq!(git.program, OsString::from("git"));
        assert_eq!(git.workdir, PathBuf::from("/repo"));
    }

    #[test]
    fn test_describe() {
        let git = GitCli::new("/repo");
        let described = git.describe(&[OsStr::new("add"), OsStr::new("number.txt")]);
        assert_eq!(described, "git add number.txt");
    }

    #[test]
    fn test_stage_and_commit() {
        let (temp_dir, repo) = create_test_repo();
        let file = temp_dir.path().join("number.txt");
        fs::write(&file, "1").unwrap();

        let git = GitCli::new(temp_dir.path());
        git.stage(&file).unwrap();

        let index = repo.index().unwrap();
        assert!(index.get_path(Path::new("number.txt"), 0).is_some());

        git.commit("Update number: 2024-03-07").unwrap();
        assert_eq!(head_message(&repo), "Update number: 2024-03-07");
    }

    #[test]
    fn test_commit_with_nothing_staged_fails() {
        let (temp_dir, _repo) = create_test_repo();
        let git = GitCli::new(temp_dir.path());

        let result = git.commit("Update number: 2024-03-07");
        assert!(matches!(result, Err(GitError::CommandFailed { .. })));
    }

    #[test]
    fn test_missing_program() {
        let temp_dir = TempDir::new().unwrap();
        let git = GitCli::new(temp_dir.path()).with_program("tally-test-no-such-git");

        let result = git.stage(Path::new("number.txt"));
        match result {
            Err(GitError::Spawn { command, .. }) => {
                assert_eq!(command, "tally-test-no-such-git add number.txt");
            }
            other => panic!("expected Spawn error, got {other:?}"),
        }
    }
}
