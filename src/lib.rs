//! Bash Buddy: install helper scripts onto `PATH` and keep Terraform
//! files formatted.
//!
//! Two binaries share this library. `bash-buddy` copies `*.sh` scripts
//! into a bin directory (backing up anything it overwrites) and removes
//! them again. `tf-buddy` runs `terraform fmt` on every changed `.tf` file
//! in the current git working tree.

pub mod backup;
pub mod changeset;
pub mod cli;
pub mod config;
pub mod deps;
pub mod engine;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod formatter;
pub mod fsops;
pub mod install;
pub mod logging;
pub mod model;
pub mod policy;
pub mod reporter;
pub mod resolve;
pub mod runner;
pub mod validate;
pub mod vcs;

pub use error::BuddyError;
