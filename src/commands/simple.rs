//! Simple interactive CLI mode
//!
//! Line-oriented game loop without TUI.

use crate::core::{Guess, Score};
use crate::game::{Game, Outcome};
use crate::output::display::print_log_entry;
use crate::solver::Solver;
use rand::Rng;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple<R: Rng>(mut rng: R) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Guess Number - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'm thinking of 4 distinct digits from 1-9, in a fixed order.");
    println!("Guess them! Each guess is scored as xA yB:\n");
    println!("  - A = digit correct, position correct");
    println!("  - B = digit correct, position wrong\n");
    println!("Commands: 'quit' to exit, 'new' for a new game, 'hint' for a");
    println!("consistent guess, 'reveal' to peek at the answer\n");

    let mut game = Game::new(&mut rng);
    let solver = Solver::new();
    let mut history: Vec<(Guess, Score)> = Vec::new();

    loop {
        let input = get_user_input("Guess")?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                game.restart(&mut rng);
                history.clear();
                println!("\n🔄 New game started!\n");
                continue;
            }
            "hint" | "h" => {
                let remaining = solver.count_candidates(&history);
                if let Some(suggestion) = solver.suggest(&history) {
                    println!("💡 Try {suggestion} ({remaining} possibilities remain)\n");
                } else {
                    println!("💡 Nothing fits the scores so far - is a typo hiding in there?\n");
                }
                continue;
            }
            "reveal" | "r" => {
                println!("🚀 answer >> {}\n", game.secret());
                continue;
            }
            _ => {}
        }

        let outcome = game.submit(&input);

        if let Some(entry) = game.log().last() {
            print_log_entry(entry);
            println!();
        }

        if let Outcome::Scored(result) = outcome {
            history.push((result.guess.clone(), result.score));

            if result.is_correct() {
                print_win_banner(result.round, &history);
                println!("Keep guessing, or type 'new' for a fresh game and 'quit' to exit.\n");
            }
        }
    }
}

fn print_win_banner(round: u32, history: &[(Guess, Score)]) {
    use colored::Colorize;

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "      🎉 🎊 ✨  N U M B E R   G U E S S E D !  ✨ 🎊 🎉      "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    let performance = match round {
        1 => ("🏆 Perfect!", "Incredible hole-in-one!"),
        2..=4 => ("⭐ Excellent!", "Outstanding deduction!"),
        5..=7 => ("💫 Great!", "Very well played!"),
        8..=10 => ("✨ Solved!", "Got there!"),
        _ => ("✓ Complete!", "Persistence pays off!"),
    };

    println!("\n  {}", performance.0.bright_yellow().bold());
    println!("  {}", performance.1.bright_white());
    println!(
        "\n  Answer found in {} {}",
        round.to_string().bright_cyan().bold(),
        if round == 1 { "round" } else { "rounds" }
    );

    println!("\n  Guess history:");
    for (i, (guess, score)) in history.iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            guess.text().bright_white().bold(),
            score.to_string().bright_cyan()
        );
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
