//! Environment checks that run before any work is done.

use anyhow::Result;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::BuddyError;
use crate::vcs::VersionControl;

/// Looks up executables on a search path.
pub struct DependencyChecker {
    search_path: Option<OsString>,
    cwd: PathBuf,
}

impl DependencyChecker {
    /// Check against the process `PATH`.
    pub fn from_env(cwd: impl Into<PathBuf>) -> Self {
        Self {
            search_path: std::env::var_os("PATH"),
            cwd: cwd.into(),
        }
    }

    /// Check against an explicit search path.
    pub fn with_search_path(search_path: impl Into<OsString>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            search_path: Some(search_path.into()),
            cwd: cwd.into(),
        }
    }

    /// Names from `tools` that cannot be found, in input order.
    pub fn missing<'a>(&self, tools: &[&'a str]) -> Vec<&'a str> {
        tools
            .iter()
            .copied()
            .filter(|tool| {
                let found = which::which_in(tool, self.search_path.as_ref(), &self.cwd);
                debug!(tool, ?found, "dependency lookup");
                found.is_err()
            })
            .collect()
    }

    /// Fail listing every missing tool, not just the first.
    pub fn require(&self, tools: &[&str]) -> Result<()> {
        let missing = self.missing(tools);
        if missing.is_empty() {
            return Ok(());
        }
        Err(BuddyError::MissingDependencies(missing.into_iter().map(String::from).collect()).into())
    }
}

/// Return the working-tree top level containing `cwd`.
pub fn require_work_tree(vcs: &impl VersionControl, cwd: &Path) -> Result<PathBuf> {
    vcs.top_level()?
        .ok_or_else(|| BuddyError::NotAWorkTree(cwd.to_path_buf()).into())
}
