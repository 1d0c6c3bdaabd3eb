//! Magnetic Cave game engine
//!
//! Magnetic Cave is a two-player connection game on an 8x8 board:
//! - Players alternately place a mark on any empty cell
//! - Five marks in a row, column or diagonal win
//! - A full board with no five is a draw
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: 8x8 board with bitboards and scoped tentative placement
//! - [`rules`]: five-in-a-row detection and game status
//! - [`eval`]: terminal position evaluation
//! - [`search`]: depth-limited minimax with a wall-clock deadline
//! - [`engine`]: move selection for the automated player
//! - [`game`]: game sessions and the text console
//!
//! # Quick Start
//!
//! ```
//! use magnetic_cave::{AIEngine, Board, Cell, EngineConfig};
//!
//! let mut board = Board::new();
//! let engine = AIEngine::with_config(EngineConfig::new(1, 500));
//!
//! board.place(3, 3, Cell::MarkA);
//!
//! // Engine answers as the second player
//! if let Some(pos) = engine.best_move(&board, Cell::MarkB) {
//!     assert!(board.place(pos.row as i32, pos.col as i32, Cell::MarkB));
//!     println!("Engine plays at ({}, {})", pos.row, pos.col);
//! }
//! ```
//!
//! # Search
//!
//! The automated player tries every empty cell, then runs a full-width
//! minimax from the opponent's point of view (depth 1 by default). Scores
//! are +1 for a `MarkB` five, -1 for a `MarkA` five and 0 otherwise. The
//! search stops recursing once the per-move deadline passes and falls back
//! to the static evaluation.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

#[cfg(test)]
mod test_support;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Pos, BOARD_SIZE};
pub use config::EngineConfig;
pub use engine::{AIEngine, MoveResult};
pub use error::{Error, Result};
pub use game::{GameMode, GameSession};
pub use rules::{has_five_in_row, GameStatus};
