//! Simulation command
//!
//! Plays complete games with the solver guessing and reports how many
//! rounds the candidate-filtering policy needs.

use crate::core::{Guess, Score};
use crate::game::{Game, Outcome};
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
pub struct SimulateConfig {
    pub count: usize,
    pub seed: u64,
}

impl SimulateConfig {
    #[must_use]
    pub const fn new(count: usize, seed: u64) -> Self {
        Self { count, seed }
    }
}

/// Result of a simulation run
pub struct SimulateResult {
    pub total_games: usize,
    pub total_rounds: u64,
    pub average_rounds: f64,
    pub min_rounds: u32,
    pub max_rounds: u32,
    pub distribution: HashMap<u32, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play `config.count` games in parallel, one seeded RNG per game
///
/// The run is fully deterministic for a given config: game i draws its
/// secret from `seed + i`.
#[must_use]
pub fn run_simulation(config: &SimulateConfig) -> SimulateResult {
    let solver = Solver::new();

    let pb = ProgressBar::new(config.count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let rounds: Vec<u32> = (0..config.count)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
            let rounds = play_single_game(&mut rng, &solver);
            pb.inc(1);
            rounds
        })
        .collect();

    pb.finish_and_clear();
    let duration = start.elapsed();

    let total_rounds: u64 = rounds.iter().map(|&r| u64::from(r)).sum();
    let mut distribution: HashMap<u32, usize> = HashMap::new();
    for &r in &rounds {
        *distribution.entry(r).or_insert(0) += 1;
    }

    SimulateResult {
        total_games: rounds.len(),
        total_rounds,
        average_rounds: total_rounds as f64 / rounds.len().max(1) as f64,
        min_rounds: rounds.iter().copied().min().unwrap_or(0),
        max_rounds: rounds.iter().copied().max().unwrap_or(0),
        distribution,
        duration,
        games_per_second: rounds.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

/// Play one game to completion, returning the number of rounds used
fn play_single_game<R: Rng + ?Sized>(rng: &mut R, solver: &Solver) -> u32 {
    let mut game = Game::new(rng);
    let mut history: Vec<(Guess, Score)> = Vec::new();

    while let Some(guess) = solver.suggest(&history) {
        if let Outcome::Scored(result) = game.submit(guess.text()) {
            if result.is_correct() {
                return result.round;
            }
            history.push((result.guess, result.score));
        }
    }

    // The true secret never leaves the candidate set, so the loop always
    // exits through the return above.
    game.round()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SECRET_SPACE;

    #[test]
    fn single_game_terminates_with_win() {
        let solver = Solver::new();
        let mut rng = StdRng::seed_from_u64(3);

        let rounds = play_single_game(&mut rng, &solver);
        assert!(rounds >= 1);
        assert!(rounds <= SECRET_SPACE as u32);
    }

    #[test]
    fn simulation_plays_every_game() {
        let config = SimulateConfig::new(20, 42);
        let result = run_simulation(&config);

        assert_eq!(result.total_games, 20);
        assert!(result.min_rounds >= 1);
        assert!(result.max_rounds >= result.min_rounds);
        assert!(result.average_rounds >= 1.0);
        assert_eq!(result.distribution.values().sum::<usize>(), 20);
    }

    #[test]
    fn simulation_is_deterministic_per_seed() {
        let config = SimulateConfig::new(10, 7);

        let first = run_simulation(&config);
        let second = run_simulation(&config);

        assert_eq!(first.total_rounds, second.total_rounds);
        assert_eq!(first.distribution, second.distribution);
    }
}
