mod check;
mod dump;
mod init;

pub use check::*;
use clap::Subcommand;
pub use dump::*;
pub use init::*;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        /// Path to config file
        #[arg(default_value = crate::conf::DEFAULT_CONFIG_FILE)]
        path: PathBuf,

        /// Print errors without diagnostics formatting
        #[arg(short, long, default_value = "false")]
        plain: bool,
    },

    /// Print resolved configuration as JSON
    Dump {
        #[arg(default_value = crate::conf::DEFAULT_CONFIG_FILE)]
        path: PathBuf,
    },

    /// Write a starter config file
    Init {
        /// Path to config file
        #[arg(default_value = crate::conf::DEFAULT_CONFIG_FILE)]
        path: PathBuf,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path, plain } => check(path, plain),
        ConfigCmd::Dump { path } => dump(path),
        ConfigCmd::Init { path } => init(path),
    }
}
