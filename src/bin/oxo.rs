//! oxo CLI - play, analyze, and benchmark the minimax tic-tac-toe engine

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Minimax tic-tac-toe engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the computer
    Play(oxo::cli::commands::play::PlayArgs),

    /// Search a position and report the best move
    Solve(oxo::cli::commands::solve::SolveArgs),

    /// Play strategies against each other and tally outcomes
    Selfplay(oxo::cli::commands::selfplay::SelfplayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => oxo::cli::commands::play::execute(args),
        Commands::Solve(args) => oxo::cli::commands::solve::execute(args),
        Commands::Selfplay(args) => oxo::cli::commands::selfplay::execute(args),
    }
}
