//! CLI argument definitions.

use clap::Parser;

use crate::commands::Commands;

/// PREXCOL CLI tool for API exploration.
#[derive(Parser, Debug)]
#[command(name = "prexcol")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}
