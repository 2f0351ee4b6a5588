use clap::Subcommand;
use std::path::PathBuf;

use crate::report::finding::Severity;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export a JSON list of results to the configured formats
    Export(ExportArgs),

    /// Initialize a .scanexport.toml config file in the current directory
    Init,

    /// List all available export formats
    ListFormats,
}

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// JSON file holding an array of results
    pub input: PathBuf,

    /// Output name; file formats write to <out>.csv / <out>.json
    #[arg(short, long, default_value = "results")]
    pub out: String,

    /// Formats to export: csv, json, stdout (repeatable or comma-separated).
    /// Overrides the config file.
    #[arg(short, long, value_delimiter = ',')]
    pub format: Vec<String>,

    /// Refuse to export if any result is above this severity.
    /// Values: Informational, Low, Medium, High
    #[arg(long)]
    pub max_severity: Option<Severity>,

    /// Load settings from this file instead of searching for .scanexport.toml
    #[arg(long, conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore .scanexport.toml files found in the working directory or its parents
    #[arg(long)]
    pub no_config: bool,
}
