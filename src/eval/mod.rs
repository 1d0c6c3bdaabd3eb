//! Evaluation module for Magnetic Cave positions
//!
//! Positions are scored only by their terminal status: a win for either
//! side or nothing. Scores are always from the second player's point of
//! view, so `MarkB` maximizes and `MarkA` minimizes.

pub mod terminal;

pub use terminal::{evaluate, Score, TerminalScore};
