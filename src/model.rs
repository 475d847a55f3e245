use std::path::{Path, PathBuf};

/// An installable helper script found in the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    /// Full path of the source file, e.g. `scripts/tf-buddy.sh`.
    pub source: PathBuf,
    /// Installed name, the file name with the script extension stripped.
    pub name: String,
}

impl Script {
    /// Build a script from a source path if it carries `extension`.
    ///
    /// Returns `None` for files with another extension, hidden files, and
    /// names that would be empty once the extension is stripped.
    pub fn from_source(source: &Path, extension: &str) -> Option<Self> {
        if source.extension()? != extension {
            return None;
        }
        let name = source.file_stem()?.to_str()?;
        if name.is_empty() || name.starts_with('.') {
            return None;
        }
        Some(Self {
            source: source.to_path_buf(),
            name: name.to_string(),
        })
    }

    pub fn target_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.name)
    }
}

/// Outcome of formatting a change set.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormatReport {
    pub planned: Vec<PathBuf>,
    pub formatted: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

impl FormatReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Outcome of an install.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub installed: Vec<String>,
    pub backed_up: Vec<String>,
}

/// Outcome of an uninstall.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UninstallReport {
    pub removed: Vec<String>,
    pub restored: Vec<String>,
}

impl UninstallReport {
    pub fn is_noop(&self) -> bool {
        self.removed.is_empty() && self.restored.is_empty()
    }
}
