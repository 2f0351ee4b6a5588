mod cli;
mod config;
mod export;
mod formats;
mod report;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("scanexport=debug")
    } else if cli.quiet {
        EnvFilter::new("scanexport=error")
    } else {
        EnvFilter::new("scanexport=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match &cli.command {
        cli::Commands::Export(args) => {
            info!("scanexport v{}", env!("CARGO_PKG_VERSION"));

            let config = config::resolve(args)?;
            let results = report::finding::load_results(&args.input)?;
            info!(
                "Loaded {} results from {}",
                results.len(),
                args.input.display()
            );

            export::export(&results, Some(&config), &args.out)?;
        }
        cli::Commands::Init => {
            config::init_config()?;
        }
        cli::Commands::ListFormats => {
            formats::list_formats();
        }
    }

    Ok(())
}
