//! External process execution.
//!
//! Everything that shells out (`git`, `terraform`) goes through
//! [`CommandRunner`], so the rest of the crate only sees a typed
//! [`Outcome`] and tests can swap in a fake.

use anyhow::Result;
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;
use tracing::debug;

use crate::error::BuddyError;

/// Result of running an external program to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Exit status zero; carries captured stdout.
    Ok(String),
    /// Nonzero exit or signal; carries a human-readable reason.
    Failed(String),
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }
}

/// Runs a program with arguments inside a working directory.
///
/// An `Err` means the program could not be started at all; a program that
/// ran and failed is reported as [`Outcome::Failed`].
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[OsString], cwd: &Path) -> Result<Outcome>;
}

/// [`CommandRunner`] backed by [`std::process::Command`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[OsString], cwd: &Path) -> Result<Outcome> {
        debug!(program, ?args, cwd = %cwd.display(), "running command");
        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|source| BuddyError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if output.status.success() {
            return Ok(Outcome::Ok(String::from_utf8_lossy(&output.stdout).into_owned()));
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let reason = match (output.status.code(), stderr.is_empty()) {
            (Some(code), true) => format!("exit status {code}"),
            (Some(code), false) => format!("exit status {code}: {stderr}"),
            (None, true) => "terminated by signal".to_string(),
            (None, false) => format!("terminated by signal: {stderr}"),
        };
        debug!(program, %reason, "command failed");
        Ok(Outcome::Failed(reason))
    }
}

/// Convenience for building argument vectors from string literals.
pub fn args<I, S>(items: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    items.into_iter().map(Into::into).collect()
}
