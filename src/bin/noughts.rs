//! noughts - Tic-Tac-Toe in the terminal with random, heuristic and minimax opponents

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-Tac-Toe against a friend or the computer", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game
    Play(noughts::cli::commands::play::PlayArgs),

    /// Run computer tiers against each other
    Arena(noughts::cli::commands::arena::ArenaArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    noughts::cli::init_tracing(cli.verbose);

    match cli.command {
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::Arena(args) => noughts::cli::commands::arena::execute(args),
    }
}
