use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::changeset;
use crate::cli::{FormatArgs, InstallArgs};
use crate::config::{FormatConfig, InstallConfig};
use crate::deps::{self, DependencyChecker};
use crate::events::Event;
use crate::exit_codes::exit;
use crate::formatter::Formatter;
use crate::install::Installer;
use crate::reporter::Reporter;
use crate::runner::{CommandRunner, ProcessRunner};
use crate::vcs::GitCli;

/// Entry point for `tf-buddy`.
pub fn format(args: FormatArgs) -> Result<i32> {
    let config = FormatConfig::from_args(&args);
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let mut reporter = Reporter::new(config.verbose);
    let checker = DependencyChecker::from_env(&cwd);
    run_format(&config, &ProcessRunner, &checker, &cwd, &mut reporter)
}

/// Check the environment, collect changed files and format them.
///
/// Environment problems are errors; per-file failures become exit code 1.
pub fn run_format<R: CommandRunner + ?Sized>(
    config: &FormatConfig,
    runner: &R,
    checker: &DependencyChecker,
    cwd: &Path,
    reporter: &mut Reporter,
) -> Result<i32> {
    checker.require(&config.required_tools())?;
    let git = GitCli::new(runner, cwd);
    let top = deps::require_work_tree(&git, cwd)?;
    info!(top = %top.display(), dry_run = config.dry_run, "formatting working tree");

    let changes = changeset::collect(&git.at(&top), &config.suffix)?;
    if changes.is_empty() {
        reporter.record(Event::NoChanges {
            suffix: config.suffix.clone(),
        });
        return Ok(exit::SUCCESS);
    }

    let formatter = Formatter::new(runner, &config.formatter_program, &top, config.dry_run);
    let report = formatter.format_all(&changes, reporter)?;
    if report.is_success() {
        reporter.record(Event::FormatSucceeded {
            count: changes.len(),
            dry_run: config.dry_run,
        });
        Ok(exit::SUCCESS)
    } else {
        reporter.record(Event::FormatAborted {
            failed: report.failed,
        });
        Ok(exit::FAILURE)
    }
}

/// Entry point for `bash-buddy`.
pub fn install(args: InstallArgs) -> Result<i32> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let config = InstallConfig::resolve(&args, &cwd)?;
    let mut reporter = Reporter::new(args.verbose);
    let installer = Installer::new(config);
    run_install(&installer, args.uninstall, &mut reporter)
}

pub fn run_install(installer: &Installer, uninstall: bool, reporter: &mut Reporter) -> Result<i32> {
    let config = installer.config();
    info!(
        source = %config.source_dir.display(),
        target = %config.target_dir.display(),
        uninstall,
        force = config.force,
        "starting"
    );
    if uninstall {
        installer.uninstall(reporter)?;
    } else {
        installer.install(reporter)?;
    }
    Ok(exit::SUCCESS)
}
