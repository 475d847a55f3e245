//! Version-control queries used to find changed files.

use anyhow::Result;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::debug;

use crate::config::GIT;
use crate::error::BuddyError;
use crate::runner::{CommandRunner, Outcome, args};

/// Questions the formatter asks of the working tree.
pub trait VersionControl {
    /// Absolute path of the working-tree top level, or `None` when the
    /// directory is not inside a working tree.
    fn top_level(&self) -> Result<Option<PathBuf>>;

    /// Tracked paths that are added, copied, or modified (staged or not)
    /// and still present in the working tree.
    fn tracked_changes(&self) -> Result<Vec<String>>;

    /// Untracked paths that are not ignored.
    fn untracked_files(&self) -> Result<Vec<String>>;
}

/// [`VersionControl`] implemented by shelling out to `git`.
///
/// Paths returned by the change queries are relative to `dir`, so `dir`
/// should be the top level once it is known.
pub struct GitCli<'r, R: ?Sized> {
    runner: &'r R,
    dir: PathBuf,
}

impl<'r, R: CommandRunner + ?Sized> GitCli<'r, R> {
    pub fn new(runner: &'r R, dir: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            dir: dir.into(),
        }
    }

    /// Re-root this client at a different directory.
    pub fn at(&self, dir: impl Into<PathBuf>) -> Self {
        Self::new(self.runner, dir)
    }

    fn query(&self, argv: &[&str]) -> Result<String> {
        match self.runner.run(GIT, &args(argv.iter().copied()), &self.dir)? {
            Outcome::Ok(stdout) => Ok(stdout),
            Outcome::Failed(reason) => Err(BuddyError::CommandFailed {
                command: format!("git {}", argv.join(" ")),
                reason,
            }
            .into()),
        }
    }
}

impl<R: CommandRunner + ?Sized> VersionControl for GitCli<'_, R> {
    fn top_level(&self) -> Result<Option<PathBuf>> {
        let outcome = self
            .runner
            .run(GIT, &args(["rev-parse", "--show-toplevel"]), &self.dir)?;
        Ok(match outcome {
            Outcome::Ok(stdout) => {
                let top = stdout.trim();
                (!top.is_empty()).then(|| PathBuf::from(top))
            }
            Outcome::Failed(reason) => {
                debug!(dir = %self.dir.display(), %reason, "not a git working tree");
                None
            }
        })
    }

    fn tracked_changes(&self) -> Result<Vec<String>> {
        let staged = self.query(&["diff", "--cached", "--name-only", "--diff-filter=ACM", "-z"])?;
        let unstaged = self.query(&["diff", "--name-only", "--diff-filter=ACM", "-z"])?;
        // Staged in the index but since removed from the working tree.
        let deleted = self.query(&["diff", "--diff-filter=D", "--name-only", "-z"])?;
        let deleted: HashSet<&str> = output_paths(&deleted).collect();
        if !deleted.is_empty() {
            debug!(deleted = deleted.len(), "skipping paths missing from working tree");
        }
        Ok(split_nul(&staged)
            .filter(|path| !deleted.contains(path.as_str()))
            .chain(split_nul(&unstaged))
            .collect())
    }

    fn untracked_files(&self) -> Result<Vec<String>> {
        let out = self.query(&["ls-files", "--others", "--exclude-standard", "-z"])?;
        Ok(split_nul(&out).collect())
    }
}

fn output_paths(output: &str) -> impl Iterator<Item = &str> {
    output.split('\0').filter(|s| !s.is_empty())
}

fn split_nul(output: &str) -> impl Iterator<Item = String> + '_ {
    output_paths(output).map(str::to_string)
}
