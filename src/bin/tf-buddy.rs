//! `tf-buddy` - format changed Terraform files in a git working tree.

use anyhow::Result;
use clap::Parser;

use bash_buddy::cli::FormatArgs;

fn main() -> Result<()> {
    let args = FormatArgs::parse();
    bash_buddy::logging::init();
    let exit_code = bash_buddy::engine::format(args)?;
    std::process::exit(exit_code);
}
