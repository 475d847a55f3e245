//! Runs `terraform fmt` over a change set.

use anyhow::Result;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::changeset::ChangeSet;
use crate::events::Event;
use crate::model::FormatReport;
use crate::reporter::Reporter;
use crate::runner::{CommandRunner, Outcome};

/// Per-file result of [`Formatter::format_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Dry run; nothing was touched.
    Planned,
    Formatted,
    Failed(String),
}

pub struct Formatter<'r, R: ?Sized> {
    runner: &'r R,
    program: String,
    work_dir: PathBuf,
    dry_run: bool,
}

impl<'r, R: CommandRunner + ?Sized> Formatter<'r, R> {
    /// `work_dir` is the directory change-set paths are relative to.
    pub fn new(
        runner: &'r R,
        program: impl Into<String>,
        work_dir: impl Into<PathBuf>,
        dry_run: bool,
    ) -> Self {
        Self {
            runner,
            program: program.into(),
            work_dir: work_dir.into(),
            dry_run,
        }
    }

    /// Format one file in place, or only report it in dry-run mode.
    ///
    /// A formatter that starts but fails is a [`FileOutcome::Failed`]; an
    /// `Err` means it could not be started at all.
    pub fn format_file(&self, path: &Path) -> Result<FileOutcome> {
        if self.dry_run {
            return Ok(FileOutcome::Planned);
        }
        let args = [OsString::from("fmt"), path.as_os_str().to_os_string()];
        Ok(match self.runner.run(&self.program, &args, &self.work_dir)? {
            Outcome::Ok(_) => FileOutcome::Formatted,
            Outcome::Failed(reason) => FileOutcome::Failed(reason),
        })
    }

    /// Format every file, continuing past failures.
    pub fn format_all(&self, changes: &ChangeSet, reporter: &mut Reporter) -> Result<FormatReport> {
        let mut report = FormatReport::default();
        for path in changes.iter() {
            if !self.dry_run {
                reporter.record(Event::FormatStarted {
                    path: path.to_path_buf(),
                });
            }
            match self.format_file(path)? {
                FileOutcome::Planned => {
                    reporter.record(Event::FormatPlanned {
                        path: path.to_path_buf(),
                    });
                    report.planned.push(path.to_path_buf());
                }
                FileOutcome::Formatted => {
                    debug!(path = %path.display(), "formatted");
                    reporter.record(Event::Formatted {
                        path: path.to_path_buf(),
                    });
                    report.formatted.push(path.to_path_buf());
                }
                FileOutcome::Failed(reason) => {
                    debug!(path = %path.display(), %reason, "format failed");
                    reporter.record(Event::FormatFailed {
                        path: path.to_path_buf(),
                        reason,
                    });
                    report.failed.push(path.to_path_buf());
                }
            }
        }
        Ok(report)
    }
}
