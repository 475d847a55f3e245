use anyhow::Result;
use indexmap::IndexSet;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::vcs::VersionControl;

/// Changed files selected for formatting in a single run.
///
/// Ordered by first appearance (tracked changes, then untracked files) and
/// free of duplicates.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChangeSet {
    paths: IndexSet<PathBuf>,
}

impl ChangeSet {
    /// Build a change set from raw candidates, keeping only `suffix` matches.
    pub fn from_candidates<I, S>(candidates: I, suffix: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let paths = candidates
            .into_iter()
            .filter(|c| c.as_ref().ends_with(suffix) && c.as_ref().len() > suffix.len())
            .map(|c| PathBuf::from(c.as_ref()))
            .collect();
        Self { paths }
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }
}

impl<'a> IntoIterator for &'a ChangeSet {
    type Item = &'a PathBuf;
    type IntoIter = indexmap::set::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

/// Ask version control for changed and untracked files ending in `suffix`.
pub fn collect(vcs: &impl VersionControl, suffix: &str) -> Result<ChangeSet> {
    let tracked = vcs.tracked_changes()?;
    let untracked = vcs.untracked_files()?;
    debug!(tracked = tracked.len(), untracked = untracked.len(), "queried working tree");
    let set = ChangeSet::from_candidates(tracked.into_iter().chain(untracked), suffix);
    debug!(selected = set.len(), suffix, "built change set");
    Ok(set)
}
