//! Root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;
use daprhome_core::paths::INSTALL_ROOT_ENV;

use crate::commands::Commands;

/// Manage the local Dapr installation layout.
#[derive(Parser)]
#[command(name = "daprhome")]
#[command(about = "Inspect, migrate and exercise a local Dapr installation")]
#[command(version)]
pub struct Cli {
    /// Use this directory instead of ~/.dapr
    #[arg(long = "install-root", global = true, env = INSTALL_ROOT_ENV)]
    pub install_root: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
