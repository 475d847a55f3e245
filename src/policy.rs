use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::BuddyError;
use crate::fsops;
use crate::model::Script;

/// What to do when a script's target name is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictPolicy {
    /// Abort the whole install before touching anything.
    Fail,
    /// Back up differing files, then overwrite.
    Overwrite,
}

impl ConflictPolicy {
    pub fn from_force(force: bool) -> Self {
        if force { Self::Overwrite } else { Self::Fail }
    }
}

/// An existing file that an install would replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub name: String,
    pub existing: PathBuf,
    /// False when the existing file already matches the incoming script.
    pub needs_backup: bool,
}

/// Find every target name already present in `target_dir`.
///
/// Under [`ConflictPolicy::Fail`] any conflict is an error naming all of
/// them.
pub fn resolve_conflicts(
    scripts: &[Script],
    target_dir: &Path,
    policy: ConflictPolicy,
) -> Result<Vec<Conflict>> {
    let mut conflicts = Vec::new();
    for script in scripts {
        let existing = script.target_in(target_dir);
        if !fsops::occupied(&existing) {
            continue;
        }
        let identical = existing.is_file() && fsops::same_contents(&existing, &script.source)?;
        let needs_backup = !identical;
        debug!(name = script.name.as_str(), needs_backup, "target already exists");
        conflicts.push(Conflict {
            name: script.name.clone(),
            existing,
            needs_backup,
        });
    }

    if policy == ConflictPolicy::Fail && !conflicts.is_empty() {
        let names = conflicts.into_iter().map(|c| c.name).collect();
        return Err(BuddyError::Conflicts(names).into());
    }
    Ok(conflicts)
}
