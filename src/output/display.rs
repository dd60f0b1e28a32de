//! Display functions for command results

use super::formatters::distribution_bar;
use crate::commands::SimulateResult;
use crate::game::{LogEntry, LogKind};
use colored::Colorize;

/// Print one result log entry, colored by severity
pub fn print_log_entry(entry: &LogEntry) {
    match entry.kind {
        LogKind::Warning => println!("{}", entry.text.yellow()),
        LogKind::Correct => println!("{}", entry.text.green().bold()),
        LogKind::Wrong => println!("{}", entry.text.normal()),
    }
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulateResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", result.average_rounds)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_rounds).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_rounds).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Round distribution:".bright_cyan().bold());

    let max_count = result.distribution.values().copied().max().unwrap_or(0);
    let mut buckets: Vec<(u32, usize)> = result
        .distribution
        .iter()
        .map(|(&rounds, &count)| (rounds, count))
        .collect();
    buckets.sort_unstable();

    for (rounds, count) in buckets {
        let pct = count as f64 / result.total_games.max(1) as f64 * 100.0;
        println!(
            "   {rounds:>2} rounds: {} {count:>5} ({pct:>4.1}%)",
            distribution_bar(count, max_count, 30).cyan()
        );
    }
    println!();
}
