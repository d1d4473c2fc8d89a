mod commands;
mod progress;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "copernicus", about = "Rank Sentinel-2 imagery by band color")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print band paths of indexed imagery at a location or over an area
    Paths(commands::paths::PathsArgs),
    /// Sample candidate bands and rank them by color distance
    Rank(commands::rank::RankArgs),
    /// Print or save the default ranking config
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Paths(args) => commands::paths::run(args),
        Commands::Rank(args) => commands::rank::run(args).await,
        Commands::Config(args) => commands::config::run(args),
    }
}
