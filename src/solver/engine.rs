//! Candidate-filtering solver
//!
//! The secret space is small enough (9*8*7*6 = 3024 ordered draws) to hold
//! in full. A candidate stays alive while it would have produced every score
//! observed so far; the suggested next guess is simply the first survivor.

use crate::core::{Guess, Score, Secret};

/// Number of possible secrets
pub const SECRET_SPACE: usize = 3024;

/// Enumerate every possible secret
///
/// # Examples
/// ```
/// use guess_number::solver::{SECRET_SPACE, all_secrets};
///
/// assert_eq!(all_secrets().len(), SECRET_SPACE);
/// ```
#[must_use]
pub fn all_secrets() -> Vec<Secret> {
    let mut pool = Vec::with_capacity(SECRET_SPACE);

    for a in 1..=9u8 {
        for b in 1..=9u8 {
            if b == a {
                continue;
            }
            for c in 1..=9u8 {
                if c == a || c == b {
                    continue;
                }
                for d in 1..=9u8 {
                    if d == a || d == b || d == c {
                        continue;
                    }
                    pool.push(Secret::from_parts([a, b, c, d]));
                }
            }
        }
    }

    pool
}

/// Tracks the secrets consistent with a history of scored guesses
pub struct Solver {
    pool: Vec<Secret>,
}

impl Solver {
    /// Create a solver over the full secret space
    #[must_use]
    pub fn new() -> Self {
        Self {
            pool: all_secrets(),
        }
    }

    /// Secrets that would have produced every observed score
    #[must_use]
    pub fn candidates<'a>(&'a self, history: &[(Guess, Score)]) -> Vec<&'a Secret> {
        self.pool
            .iter()
            .filter(|candidate| {
                history
                    .iter()
                    .all(|(guess, observed)| Score::calculate(guess, candidate) == *observed)
            })
            .collect()
    }

    /// Count how many candidates remain given the history
    #[must_use]
    pub fn count_candidates(&self, history: &[(Guess, Score)]) -> usize {
        self.candidates(history).len()
    }

    /// Suggest a next guess consistent with the history
    ///
    /// Returns the first surviving candidate as a playable guess, or `None`
    /// if the observed scores are contradictory.
    #[must_use]
    pub fn suggest(&self, history: &[(Guess, Score)]) -> Option<Guess> {
        self.candidates(history)
            .first()
            .map(|secret| Guess::from_parts(*secret.digits()))
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(guess: &str, secret: &Secret) -> (Guess, Score) {
        let guess = Guess::parse(guess).unwrap();
        let score = Score::calculate(&guess, secret);
        (guess, score)
    }

    #[test]
    fn pool_covers_full_space() {
        let pool = all_secrets();
        assert_eq!(pool.len(), SECRET_SPACE);

        // Spot-check distinctness of the first and last draws
        assert_eq!(pool[0].digits(), &[1, 2, 3, 4]);
        assert_eq!(pool[SECRET_SPACE - 1].digits(), &[9, 8, 7, 6]);
    }

    #[test]
    fn empty_history_keeps_everything() {
        let solver = Solver::new();
        assert_eq!(solver.count_candidates(&[]), SECRET_SPACE);
    }

    #[test]
    fn true_secret_always_survives() {
        let solver = Solver::new();
        let secret = Secret::from_digits([7, 3, 9, 1]).unwrap();

        let history = vec![
            score("1234", &secret),
            score("5678", &secret),
            score("3719", &secret),
        ];

        let candidates = solver.candidates(&history);
        assert!(candidates.iter().any(|c| **c == secret));
    }

    #[test]
    fn candidates_shrink_monotonically() {
        let solver = Solver::new();
        let secret = Secret::from_digits([2, 8, 4, 6]).unwrap();

        let mut history = Vec::new();
        let mut previous = SECRET_SPACE;

        for guess in ["1234", "5678", "2846"] {
            history.push(score(guess, &secret));
            let remaining = solver.count_candidates(&history);
            assert!(remaining <= previous);
            previous = remaining;
        }
    }

    #[test]
    fn perfect_score_pins_single_candidate() {
        let solver = Solver::new();
        let secret = Secret::from_digits([7, 3, 9, 1]).unwrap();

        let history = vec![score("7391", &secret)];
        let candidates = solver.candidates(&history);

        assert_eq!(candidates.len(), 1);
        assert_eq!(*candidates[0], secret);
    }

    #[test]
    fn suggestion_is_consistent_with_history() {
        let solver = Solver::new();
        let secret = Secret::from_digits([9, 1, 5, 3]).unwrap();

        let history = vec![score("1234", &secret), score("5678", &secret)];
        let suggestion = solver.suggest(&history).unwrap();

        // The suggested guess must itself be a surviving candidate
        let candidates = solver.candidates(&history);
        assert!(
            candidates
                .iter()
                .any(|c| c.digits() == suggestion.digits())
        );
    }

    #[test]
    fn contradictory_history_yields_nothing() {
        let solver = Solver::new();
        let guess = Guess::parse("1234").unwrap();

        // 4A and 0A for the same guess cannot both hold
        let history = vec![
            (guess.clone(), Score::PERFECT),
            (
                guess,
                Score::calculate(
                    &Guess::parse("5678").unwrap(),
                    &Secret::from_digits([1, 2, 3, 4]).unwrap(),
                ),
            ),
        ];

        assert_eq!(solver.count_candidates(&history), 0);
        assert!(solver.suggest(&history).is_none());
    }
}
