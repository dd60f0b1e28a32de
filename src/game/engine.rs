//! The game engine
//!
//! A `Game` is an explicitly constructed state value; all randomness is
//! injected through the caller's RNG, so a seeded generator yields a fully
//! deterministic game.

use super::log::{LogEntry, LogKind};
use crate::core::{Guess, GuessError, Score, Secret};
use rand::Rng;

/// Warning appended when a submission fails validation
const INVALID_INPUT_WARNING: &str = "⚠️ WARNING: Parameter error, input is invalid";

/// Game state: the hidden secret, the round counter, and the result log
#[derive(Debug, Clone)]
pub struct Game {
    secret: Secret,
    round: u32,
    log: Vec<LogEntry>,
}

/// Result of a single submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Input failed validation; the round was not consumed
    Rejected(GuessError),
    /// Input was accepted and scored
    Scored(RoundResult),
}

/// A scored round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub round: u32,
    pub guess: Guess,
    pub score: Score,
}

impl RoundResult {
    /// Whether this round won the game
    #[inline]
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.score.is_correct()
    }
}

impl Game {
    /// Start a fresh game with a uniformly random secret
    #[must_use]
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            secret: Secret::random(rng),
            round: 0,
            log: Vec::new(),
        }
    }

    /// Start a game over a known secret
    ///
    /// Deterministic alternative to [`Game::new`] for tests and replays.
    #[must_use]
    pub fn with_secret(secret: Secret) -> Self {
        Self {
            secret,
            round: 0,
            log: Vec::new(),
        }
    }

    /// Begin a new game: fresh secret, round 0, empty log
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.secret = Secret::random(rng);
        self.round = 0;
        self.log.clear();
    }

    /// Submit a guess
    ///
    /// Invalid input appends a warning entry and leaves the round counter
    /// untouched. Valid input consumes a round, is scored against the
    /// secret, and appends an entry with the outcome marker, round number,
    /// raw input, and score. Never fails; malformed input is a reported
    /// condition, not an error.
    pub fn submit(&mut self, text: &str) -> Outcome {
        let guess = match Guess::parse(text) {
            Ok(guess) => guess,
            Err(err) => {
                self.log
                    .push(LogEntry::new(INVALID_INPUT_WARNING, LogKind::Warning));
                return Outcome::Rejected(err);
            }
        };

        self.round += 1;
        let score = Score::calculate(&guess, &self.secret);

        let (marker, kind) = if score.is_correct() {
            ("🎉 CORRECT", LogKind::Correct)
        } else {
            ("❌ WRONG", LogKind::Wrong)
        };

        self.log.push(LogEntry::new(
            format!(
                "{marker}: {} time(s) enter {}. Result: {score}",
                self.round,
                guess.text()
            ),
            kind,
        ));

        Outcome::Scored(RoundResult {
            round: self.round,
            guess,
            score,
        })
    }

    /// Number of accepted guesses since the last restart
    #[inline]
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// The result log, one entry per submission since the last restart
    #[inline]
    #[must_use]
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    /// The hidden answer
    ///
    /// Exposed for the reveal command and for scoring in simulations.
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Secret {
        &self.secret
    }
}
