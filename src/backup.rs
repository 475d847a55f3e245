//! Backup location for files overwritten by a forced install.
//!
//! The backup directory is flat: one entry per overwritten file, named
//! after the script that replaced it. It is either fully populated or
//! absent. A forced install that needs to back anything up starts from an
//! empty directory, and uninstall restores every entry before deleting the
//! directory as a whole.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::fsops;

#[derive(Debug, Clone)]
pub struct BackupStore {
    dir: PathBuf,
}

impl BackupStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn exists(&self) -> bool {
        self.dir.is_dir()
    }

    /// Drop any previous backup and start from an empty directory.
    pub fn recreate(&self) -> Result<()> {
        if self.dir.exists() {
            debug!(dir = %self.dir.display(), "discarding previous backup");
            std::fs::remove_dir_all(&self.dir)
                .with_context(|| format!("failed to clear backup {}", self.dir.display()))?;
        }
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create backup {}", self.dir.display()))?;
        Ok(())
    }

    /// Copy `file` into the backup under `name`.
    pub fn stash(&self, name: &str, file: &Path) -> Result<PathBuf> {
        let dst = self.dir.join(name);
        fsops::copy_verbatim(file, &dst)?;
        info!(name, backup = %dst.display(), "backed up existing file");
        Ok(dst)
    }

    /// Names of every backed-up file, sorted.
    pub fn entries(&self) -> Result<Vec<String>> {
        if !self.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in WalkDir::new(&self.dir).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }

    /// Copy every entry back into `target_dir`, make each executable, then
    /// delete the backup directory.
    ///
    /// The directory is only removed once every entry has been restored, so
    /// a failure part way leaves the remaining backups in place.
    pub fn restore_into(&self, target_dir: &Path) -> Result<Vec<String>> {
        let names = self.entries()?;
        for name in &names {
            let dst = target_dir.join(name);
            fsops::copy_verbatim(&self.dir.join(name), &dst)?;
            fsops::set_executable(&dst)?;
            info!(name = name.as_str(), dst = %dst.display(), "restored from backup");
        }
        if self.exists() {
            std::fs::remove_dir_all(&self.dir)
                .with_context(|| format!("failed to remove backup {}", self.dir.display()))?;
        }
        Ok(names)
    }
}
