//! Guess Number - CLI
//!
//! 1A2B bulls-and-cows digit guessing game with TUI and CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use guess_number::{
    commands::{SimulateConfig, run_simple, run_simulation},
    interactive::{App, run_tui},
    output::print_simulation_result,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(
    name = "guess_number",
    about = "1A2B digit guessing game: find 4 hidden distinct digits from 1-9",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for a deterministic secret (drawn from the OS when omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-oriented, no TUI)
    Simple,

    /// Play many solver-driven games and report round statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_tui(App::new(StdRng::seed_from_u64(seed))),
        Commands::Simple => run_simple(StdRng::seed_from_u64(seed)).map_err(|e| anyhow::anyhow!(e)),
        Commands::Simulate { count } => {
            println!("Running {count} solver-driven games...");
            let result = run_simulation(&SimulateConfig::new(count, seed));
            print_simulation_result(&result);
            Ok(())
        }
    }
}
