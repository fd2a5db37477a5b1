mod check;
mod init;

#[cfg(test)]
mod tests;

pub use check::*;
use clap::Subcommand;
pub use init::*;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and the stop-word list, then exit
    Check {
        /// Path to config file
        #[arg(default_value = "chatlens.toml")]
        path: PathBuf,

        /// Print errors without colors
        #[arg(short, long, default_value = "false")]
        plain: bool,
    },

    /// Write a starter chatlens.toml and stopwords.txt
    Init {
        /// Directory to create; must be missing or empty
        #[arg(default_value = "chatlens-config")]
        path: PathBuf,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path, plain } => check(path, plain),
        ConfigCmd::Init { path } => init(path),
    }
}
