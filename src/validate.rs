use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::BuddyError;
use crate::model::Script;

/// List installable scripts at the top level of `source_dir`, sorted by
/// name.
///
/// A missing directory and a directory without scripts are both
/// [`BuddyError::NoScripts`].
pub fn discover_scripts(source_dir: &Path, extension: &str) -> Result<Vec<Script>> {
    if !source_dir.is_dir() {
        return Err(BuddyError::NoScripts(source_dir.to_path_buf()).into());
    }
    let mut scripts = Vec::new();
    for entry in WalkDir::new(source_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry =
            entry.with_context(|| format!("failed to read {}", source_dir.display()))?;
        if !entry.path().is_file() {
            continue;
        }
        if let Some(script) = Script::from_source(entry.path(), extension) {
            scripts.push(script);
        }
    }
    debug!(dir = %source_dir.display(), count = scripts.len(), "discovered scripts");
    if scripts.is_empty() {
        return Err(BuddyError::NoScripts(source_dir.to_path_buf()).into());
    }
    Ok(scripts)
}

/// Create `dir` if needed and prove we can write into it.
pub fn ensure_writable(dir: &Path) -> Result<()> {
    let not_writable = |source| BuddyError::DestinationNotWritable {
        path: dir.to_path_buf(),
        source,
    };
    std::fs::create_dir_all(dir).map_err(not_writable)?;
    // Dropped immediately; only its creation matters.
    tempfile::NamedTempFile::new_in(dir).map_err(not_writable)?;
    Ok(())
}
