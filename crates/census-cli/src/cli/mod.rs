use std::path::PathBuf;

use clap::Parser;

pub mod root_commands;

pub use root_commands::Commands;

/// Top-level CLI parser for the `census` binary.
#[derive(Debug, Parser)]
#[command(
    name = "census",
    version,
    about = "Build periodic-table presence and count caches for OPTIMADE providers"
)]
pub struct Cli {
    /// Pass to run (defaults to `ptable`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file used instead of ./census.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}
