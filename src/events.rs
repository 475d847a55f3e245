use std::path::PathBuf;

/// Something worth telling the user about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Dry run: `path` would be formatted.
    FormatPlanned { path: PathBuf },
    FormatStarted { path: PathBuf },
    Formatted { path: PathBuf },
    FormatFailed { path: PathBuf, reason: String },
    /// No changed files matched the suffix.
    NoChanges { suffix: String },
    FormatSucceeded { count: usize, dry_run: bool },
    /// Final aggregate of every path that failed to format.
    FormatAborted { failed: Vec<PathBuf> },

    BackedUp { name: String, backup: PathBuf },
    ScriptInstalled { name: String, path: PathBuf },
    InstallCompleted { count: usize, dir: PathBuf },
    /// Destination is not on `PATH`.
    NotOnPath { dir: PathBuf },
    ScriptRemoved { name: String },
    Restored { name: String },
    UninstallCompleted { removed: usize, restored: usize },
    NothingToUninstall { dir: PathBuf },
}

/// How loudly an [`Event`] is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Only shown with `--verbose`.
    Progress,
    Notice,
    Warning,
    Failure,
}

impl Event {
    pub fn level(&self) -> Level {
        match self {
            Event::FormatStarted { .. }
            | Event::Formatted { .. }
            | Event::NoChanges { .. }
            | Event::FormatSucceeded { .. }
            | Event::BackedUp { .. }
            | Event::ScriptInstalled { .. }
            | Event::ScriptRemoved { .. }
            | Event::Restored { .. }
            | Event::NothingToUninstall { .. } => Level::Progress,
            Event::FormatPlanned { .. }
            | Event::InstallCompleted { .. }
            | Event::UninstallCompleted { .. } => Level::Notice,
            Event::NotOnPath { .. } => Level::Warning,
            Event::FormatFailed { .. } | Event::FormatAborted { .. } => Level::Failure,
        }
    }

    /// Human-readable line(s) for this event.
    pub fn message(&self) -> String {
        match self {
            Event::FormatPlanned { path } => format!("Would format: {}", path.display()),
            Event::FormatStarted { path } => format!("Formatting {}", path.display()),
            Event::Formatted { path } => format!("Formatted {}", path.display()),
            Event::FormatFailed { path, reason } => {
                format!("Failed to format {}: {reason}", path.display())
            }
            Event::NoChanges { suffix } => format!("No changed {suffix} files found"),
            Event::FormatSucceeded { count, dry_run: true } => {
                format!("Dry run complete: {count} file(s) would be formatted")
            }
            Event::FormatSucceeded { count, dry_run: false } => {
                format!("Formatted {count} file(s) successfully")
            }
            Event::FormatAborted { failed } => {
                let mut msg = format!("Failed to format {} file(s):", failed.len());
                for path in failed {
                    msg.push_str(&format!("\n  {}", path.display()));
                }
                msg
            }
            Event::BackedUp { name, backup } => {
                format!("Backed up existing {name} to {}", backup.display())
            }
            Event::ScriptInstalled { name, path } => {
                format!("Installed {name} -> {}", path.display())
            }
            Event::InstallCompleted { count, dir } => {
                format!("Installed {count} script(s) to {}", dir.display())
            }
            Event::NotOnPath { dir } => format!(
                "warning: {dir} is not in your PATH; add it with:\n  export PATH=\"{dir}:$PATH\"",
                dir = dir.display()
            ),
            Event::ScriptRemoved { name } => format!("Removed {name}"),
            Event::Restored { name } => format!("Restored {name} from backup"),
            Event::UninstallCompleted { removed, restored } => {
                format!("Removed {removed} script(s), restored {restored} file(s) from backup")
            }
            Event::NothingToUninstall { dir } => {
                format!("Nothing to uninstall in {}", dir.display())
            }
        }
    }
}
