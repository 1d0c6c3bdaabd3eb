//! Depth-limited minimax with a wall-clock deadline
//!
//! Full-width search: every empty cell is tried in row-major order at every
//! node. `MarkB` is the maximizing side and `MarkA` the minimizing side, so
//! scores read the same as [`evaluate`].
//!
//! The search mutates one board in place. Each child is explored through a
//! [`Tentative`](crate::board::Tentative) guard, which clears the cell when
//! the child returns, so every frame leaves the board exactly as it found it.
//!
//! # Example
//!
//! ```
//! use magnetic_cave::board::{Board, Cell};
//! use magnetic_cave::search::{Deadline, Minimax, SystemClock};
//!
//! let mut board = Board::new();
//! for col in 0..4 {
//!     board.place(0, col, Cell::MarkB);
//! }
//!
//! let mut search = Minimax::new(&SystemClock, Deadline::never());
//! // MarkB to move completes the row
//! assert_eq!(search.search(&mut board, 1, true), 1);
//! assert_eq!(board.mark_count(), 4);
//! ```

use crate::board::{Board, Cell};
use crate::eval::{evaluate, Score, TerminalScore};

use super::clock::{Clock, Deadline};

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, including the root
    pub nodes: u64,
    /// Frames that returned the static evaluation because time ran out
    pub deadline_cutoffs: u64,
}

/// Minimax searcher bound to one clock and one deadline.
///
/// Build one per top-level move selection; the deadline is fixed for the
/// searcher's lifetime.
pub struct Minimax<'c, C: Clock + ?Sized> {
    clock: &'c C,
    deadline: Deadline,
    stats: SearchStats,
}

impl<'c, C: Clock + ?Sized> Minimax<'c, C> {
    pub fn new(clock: &'c C, deadline: Deadline) -> Self {
        Self {
            clock,
            deadline,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Score `board` with `maximizing` telling whether `MarkB` is to move.
    ///
    /// Returns the static evaluation when `depth` is zero, the board is full,
    /// either side already has five, or the deadline has passed. Otherwise
    /// tries every empty cell for the side to move and keeps the max (for
    /// `MarkB`) or min (for `MarkA`) of the children.
    pub fn search(&mut self, board: &mut Board, depth: u32, maximizing: bool) -> Score {
        self.stats.nodes += 1;

        if depth == 0 || board.is_full() {
            return evaluate(board);
        }
        let static_score = evaluate(board);
        if static_score != TerminalScore::NEUTRAL {
            return static_score;
        }
        if self.deadline.is_reached(self.clock) {
            self.stats.deadline_cutoffs += 1;
            return static_score;
        }

        let (mark, mut best) = if maximizing {
            (Cell::MarkB, Score::MIN)
        } else {
            (Cell::MarkA, Score::MAX)
        };

        // The iterator owns a snapshot of the empty set, so the board is free
        // to be mutated while we walk it.
        for pos in board.empty_cells() {
            let Some(mut child) = board.tentative(pos, mark) else {
                continue;
            };
            let score = self.search(&mut child, depth - 1, !maximizing);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}
