pub mod commands;

use clap::Parser;

pub use commands::{Commands, ExportArgs};

/// scanexport — export check results to CSV, JSON or a terminal table
///
/// Refuses to export when a result is above the configured maximum severity.
#[derive(Parser, Debug)]
#[command(
    name = "scanexport",
    version,
    about = "scanexport — export check results to CSV, JSON or a terminal table",
    long_about = "scanexport writes check results as CSV, JSON or a color-coded table.\nIf any result is above the configured maximum severity, nothing is exported."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}
