//! Core domain types for the 1A2B game
//!
//! This module contains the fundamental domain types with zero external state.
//! All types here are pure, testable, and have clear mathematical properties.

mod guess;
mod score;
mod secret;

pub use guess::{Guess, GuessError};
pub use score::Score;
pub use secret::{Secret, SecretError};
