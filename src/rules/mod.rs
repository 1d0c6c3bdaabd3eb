//! Game rules for Magnetic Cave
//!
//! Five in a row along a row, column or diagonal wins; a full board with no
//! five is a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{game_status, has_five_in_row, GameStatus, WIN_LENGTH};
