//! Tic-tac-toe CLI - Command-line interface
//!
//! Commands:
//! - play: Play an interactive game against the engine
//! - analyze: Show the engine's reply to a position
//! - match: Play the engine against a random opponent
//! - verify: Exhaustively check that the engine never loses

mod analyze;
mod config;
mod match_cmd;
mod play;
mod render;
mod verify;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::PlayConfig;

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(about = "Unbeatable tic-tac-toe engine")]
struct Cli {
    /// Random seed for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// JSON config file for the interactive game
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the engine
    Play(play::PlayArgs),
    /// Show the engine's reply to a position
    Analyze(analyze::AnalyzeArgs),
    /// Play the engine against a random opponent
    Match(match_cmd::MatchArgs),
    /// Check every human strategy against the engine
    Verify(verify::VerifyArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never mix with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => {
            let config = PlayConfig::load_or_default(cli.config.as_deref())?;
            play::run(args, config)
        }
        Commands::Analyze(args) => analyze::run(args),
        Commands::Match(args) => match_cmd::run(args, cli.seed),
        Commands::Verify(args) => verify::run(args),
    }
}
