use clap::Parser;
use std::path::PathBuf;

/// Install or uninstall the Bash Buddy helper scripts.
#[derive(Parser, Debug, Clone)]
#[command(name = "bash-buddy", version, about, long_about = None)]
pub struct InstallArgs {
    /// Install into DIR instead of ~/.local/bin.
    #[arg(short, long, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Overwrite existing files, backing up the originals.
    #[arg(short, long)]
    pub force: bool,

    /// Remove installed scripts and restore any backups.
    #[arg(short, long)]
    pub uninstall: bool,

    /// Print each file as it is installed, backed up, or removed.
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory holding the *.sh scripts to install.
    #[arg(
        short,
        long,
        value_name = "DIR",
        env = "BASH_BUDDY_SOURCE",
        default_value = "scripts"
    )]
    pub source: PathBuf,

    /// Where overwritten files are stashed during a forced install.
    #[arg(long, value_name = "DIR", env = "BASH_BUDDY_BACKUP_DIR", hide = true)]
    pub backup_dir: Option<PathBuf>,
}

/// Format changed Terraform files in the current git working tree.
#[derive(Parser, Debug, Clone)]
#[command(name = "tf-buddy", version, about, long_about = None)]
pub struct FormatArgs {
    /// Show which files would be formatted without touching them.
    #[arg(short, long)]
    pub dry_run: bool,

    /// Print progress for every file.
    #[arg(short, long)]
    pub verbose: bool,
}
