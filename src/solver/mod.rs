//! Candidate tracking and hints
//!
//! Advisory layer over the engine: tracks which secrets remain consistent
//! with the scores seen so far and suggests a next guess.

mod engine;

pub use engine::{SECRET_SPACE, Solver, all_secrets};
