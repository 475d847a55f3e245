//! Installing and uninstalling helper scripts.

use anyhow::{Context, Result, bail};
use std::ffi::OsString;
use tracing::info;

use crate::backup::BackupStore;
use crate::config::InstallConfig;
use crate::events::Event;
use crate::fsops;
use crate::model::{InstallReport, UninstallReport};
use crate::policy::{self, ConflictPolicy};
use crate::reporter::Reporter;
use crate::resolve;
use crate::validate;

/// Copies scripts into the target directory and undoes it again.
///
/// There is no rollback: a failure part way through leaves whatever the
/// last completed copy left behind.
pub struct Installer {
    config: InstallConfig,
    backup: BackupStore,
    search_path: Option<OsString>,
}

impl Installer {
    pub fn new(config: InstallConfig) -> Self {
        let backup = BackupStore::new(&config.backup_dir);
        Self {
            config,
            backup,
            search_path: std::env::var_os("PATH"),
        }
    }

    /// Use `search_path` instead of `PATH` for the "not on PATH" warning.
    pub fn with_search_path(mut self, search_path: impl Into<OsString>) -> Self {
        self.search_path = Some(search_path.into());
        self
    }

    pub fn config(&self) -> &InstallConfig {
        &self.config
    }

    pub fn install(&self, reporter: &mut Reporter) -> Result<InstallReport> {
        let target_dir = &self.config.target_dir;
        let scripts = validate::discover_scripts(&self.config.source_dir, &self.config.extension)?;
        validate::ensure_writable(target_dir)?;

        let conflicts = policy::resolve_conflicts(
            &scripts,
            target_dir,
            ConflictPolicy::from_force(self.config.force),
        )?;
        if let Some(odd) = conflicts.iter().find(|c| !c.existing.is_file()) {
            bail!("cannot replace {}: not a regular file", odd.existing.display());
        }

        let mut report = InstallReport::default();
        let to_backup: Vec<_> = conflicts.iter().filter(|c| c.needs_backup).collect();
        if !to_backup.is_empty() {
            self.backup.recreate()?;
            for conflict in to_backup {
                let backup = self.backup.stash(&conflict.name, &conflict.existing)?;
                reporter.record(Event::BackedUp {
                    name: conflict.name.clone(),
                    backup,
                });
                report.backed_up.push(conflict.name.clone());
            }
        }

        for script in &scripts {
            let dst = script.target_in(target_dir);
            fsops::install_executable(&script.source, &dst)
                .with_context(|| format!("failed to install {}", script.name))?;
            info!(name = script.name.as_str(), dst = %dst.display(), "installed script");
            reporter.record(Event::ScriptInstalled {
                name: script.name.clone(),
                path: dst,
            });
            report.installed.push(script.name.clone());
        }

        reporter.record(Event::InstallCompleted {
            count: report.installed.len(),
            dir: target_dir.clone(),
        });
        if !resolve::is_on_search_path(target_dir, self.search_path.as_deref()) {
            reporter.record(Event::NotOnPath {
                dir: target_dir.clone(),
            });
        }
        Ok(report)
    }

    pub fn uninstall(&self, reporter: &mut Reporter) -> Result<UninstallReport> {
        let target_dir = &self.config.target_dir;
        let scripts = validate::discover_scripts(&self.config.source_dir, &self.config.extension)?;

        let mut report = UninstallReport::default();
        for script in &scripts {
            let installed = script.target_in(target_dir);
            if !fsops::occupied(&installed) || installed.is_dir() {
                continue;
            }
            std::fs::remove_file(&installed)
                .with_context(|| format!("failed to remove {}", installed.display()))?;
            info!(name = script.name.as_str(), "removed script");
            reporter.record(Event::ScriptRemoved {
                name: script.name.clone(),
            });
            report.removed.push(script.name.clone());
        }

        if self.backup.exists() {
            std::fs::create_dir_all(target_dir)
                .with_context(|| format!("failed to create {}", target_dir.display()))?;
            for name in self.backup.restore_into(target_dir)? {
                reporter.record(Event::Restored { name: name.clone() });
                report.restored.push(name);
            }
        }

        if report.is_noop() {
            reporter.record(Event::NothingToUninstall {
                dir: target_dir.clone(),
            });
        } else {
            reporter.record(Event::UninstallCompleted {
                removed: report.removed.len(),
                restored: report.restored.len(),
            });
        }
        Ok(report)
    }
}
