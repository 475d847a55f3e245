//! `bash-buddy` - install and uninstall the helper scripts.

use anyhow::Result;
use clap::Parser;

use bash_buddy::cli::InstallArgs;

fn main() -> Result<()> {
    let args = InstallArgs::parse();
    bash_buddy::logging::init();
    let exit_code = bash_buddy::engine::install(args)?;
    std::process::exit(exit_code);
}
