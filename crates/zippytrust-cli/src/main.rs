// crates/zippytrust-cli/src/main.rs
//
// CLI entrypoint for the ZippyCoin trust engine.
//
// Provides subcommands for scoring a wallet set against a delegation
// snapshot, inspecting a single wallet's factor breakdown, and printing
// the default engine configuration.

mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand};
use commands::inspect::InspectCmd;
use commands::score::ScoreCmd;

/// ZippyCoin trust engine CLI.
#[derive(Parser, Debug)]
#[command(
    name = "zippytrust",
    version = "0.1.0",
    about = "ZippyCoin trust engine — delegated trust scoring for wallet networks"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Score every wallet in a wallet file against a delegation file.
    Score(ScoreCmd),

    /// Show the factor breakdown for a single wallet.
    Inspect(InspectCmd),

    /// Print the default engine configuration as TOML.
    Config,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber for structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Score(cmd) => commands::score::run(cmd)?,
        Commands::Inspect(cmd) => commands::inspect::run(cmd)?,
        Commands::Config => commands::config::run()?,
    }

    Ok(())
}
