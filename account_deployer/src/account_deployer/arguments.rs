//!
//! The account deployer arguments.
//!

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

///
/// The account deployer arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Prints the detailed progress.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppresses the progress output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The project root directory.
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// The command to run.
    #[command(subcommand)]
    pub command: Command,
}

///
/// The account deployer command.
///
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compiles the contracts into `artifacts/`.
    Compile {
        /// Only uses the compiler binaries already in `solc-bin/` or `${PATH}`.
        #[arg(long)]
        no_download: bool,
    },
    /// Compiles the contracts and runs the deployment scripts.
    Deploy {
        /// The target network.
        #[arg(short, long, default_value = "dev")]
        network: account_deployer::NetworkName,

        /// Uses the existing artifacts.
        #[arg(long)]
        no_compile: bool,

        /// Only uses the compiler binaries already in `solc-bin/` or `${PATH}`.
        #[arg(long, conflicts_with = "no_compile")]
        no_download: bool,
    },
    /// Prints the resolved configuration with the secrets redacted.
    Config {
        /// Prints only the descriptor of the network.
        #[arg(short, long)]
        network: Option<account_deployer::NetworkName>,
    },
}
