//! searchlab CLI - minimax Tic-Tac-Toe and degrees of separation
//!
//! This CLI provides a unified interface for:
//! - Playing Tic-Tac-Toe against an exhaustive minimax player
//! - Solving positions (value of every move)
//! - Finding the shortest co-starring path between two people

use anyhow::Result;
use clap::{Parser, Subcommand};
use searchlab::cli::{self, commands, config::CommonConfig};

#[derive(Parser)]
#[command(name = "searchlab")]
#[command(version, about = "Game-tree and graph search toolkit", long_about = None)]
struct Cli {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Hide progress spinners
    #[arg(long, global = true)]
    no_progress: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play Tic-Tac-Toe against the minimax player
    Play(commands::play::PlayArgs),

    /// Compute minimax values for a position
    Solve(commands::solve::SolveArgs),

    /// Find the degrees of separation between two people
    Degrees(commands::degrees::DegreesArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let common = CommonConfig {
        verbose: cli.verbose,
        progress: !cli.no_progress,
    };
    cli::init_tracing(&common);

    match cli.command {
        Commands::Play(args) => commands::play::execute(args),
        Commands::Solve(args) => commands::solve::execute(args),
        Commands::Degrees(args) => commands::degrees::execute(args, &common),
    }
}
