//! Guess Number
//!
//! A "bulls and cows" (1A2B) digit guessing game: the engine hides an ordered
//! sequence of 4 distinct digits from 1-9 and scores each guess as `xA yB`,
//! where A counts digits correct in value and position and B counts digits
//! correct in value only.
//!
//! # Quick Start
//!
//! ```rust
//! use guess_number::core::{Guess, Score, Secret};
//!
//! let secret = Secret::from_digits([7, 3, 9, 1]).unwrap();
//! let guess = Guess::parse("7321").unwrap();
//!
//! let score = Score::calculate(&guess, &secret);
//! assert_eq!((score.bulls(), score.cows()), (3, 0));
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Candidate tracking and hints
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
