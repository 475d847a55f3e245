//! Resolved run configuration.
//!
//! CLI arguments are turned into these structs once, up front, and each
//! component receives the piece it needs.

use anyhow::{Context, Result};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

use crate::cli::{FormatArgs, InstallArgs};
use crate::error::BuddyError;

/// Extension of installable scripts in the source directory.
pub const SCRIPT_EXTENSION: &str = "sh";

/// Suffix of files handed to the formatter.
pub const TERRAFORM_SUFFIX: &str = ".tf";

pub const GIT: &str = "git";
pub const TERRAFORM: &str = "terraform";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallConfig {
    pub source_dir: PathBuf,
    pub target_dir: PathBuf,
    pub backup_dir: PathBuf,
    pub force: bool,
    pub extension: String,
}

impl InstallConfig {
    /// Resolve defaults and make every directory absolute against `cwd`.
    pub fn resolve(args: &InstallArgs, cwd: &Path) -> Result<Self> {
        let target_dir = match &args.directory {
            Some(dir) => dir.clone(),
            None => default_target_dir()?,
        };
        let backup_dir = match &args.backup_dir {
            Some(dir) => dir.clone(),
            None => default_backup_dir()?,
        };
        Ok(Self {
            source_dir: absolutize(&args.source, cwd)?,
            target_dir: absolutize(&target_dir, cwd)?,
            backup_dir: absolutize(&backup_dir, cwd)?,
            force: args.force,
            extension: SCRIPT_EXTENSION.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    pub dry_run: bool,
    pub verbose: bool,
    pub suffix: String,
    pub formatter_program: String,
}

impl FormatConfig {
    pub fn from_args(args: &FormatArgs) -> Self {
        Self {
            dry_run: args.dry_run,
            verbose: args.verbose,
            suffix: TERRAFORM_SUFFIX.to_string(),
            formatter_program: TERRAFORM.to_string(),
        }
    }

    /// Executables that must be on `PATH` before anything runs.
    pub fn required_tools(&self) -> [&str; 2] {
        [GIT, self.formatter_program.as_str()]
    }
}

/// `~/.local/bin`.
pub fn default_target_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".local").join("bin"))
        .ok_or_else(|| BuddyError::NoWayHome.into())
}

/// `$XDG_DATA_HOME/bash-buddy/backup`, or the platform equivalent.
pub fn default_backup_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|data| data.join("bash-buddy").join("backup"))
        .ok_or_else(|| BuddyError::NoWayHome.into())
}

fn absolutize(path: &Path, cwd: &Path) -> Result<PathBuf> {
    let abs = path
        .absolutize_from(cwd)
        .with_context(|| format!("cannot resolve path {}", path.display()))?;
    Ok(abs.into_owned())
}
