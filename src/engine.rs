//! Move selection for the automated player
//!
//! The engine tries every empty cell in row-major order, scores the
//! resulting position with a shallow minimax in which the opponent moves
//! next, and keeps the first candidate with the strictly best score.
//!
//! With the default depth of 1 the engine sees its own placement and the
//! opponent's best immediate reply, trading strength for response time.
//! The depth is a configuration value.
//!
//! # Example
//!
//! ```
//! use magnetic_cave::{AIEngine, Board, Cell, EngineConfig, Pos};
//!
//! let engine = AIEngine::with_config(EngineConfig::new(1, 500));
//! let mut board = Board::new();
//! for col in 0..4 {
//!     board.place(3, col, Cell::MarkB);
//! }
//!
//! let result = engine.best_move_with_stats(&board, Cell::MarkB);
//! assert_eq!(result.best_move, Some(Pos::new(3, 4)));
//! println!("Nodes: {}, time: {}ms", result.nodes, result.time_ms());
//! ```

use std::time::Duration;

use log::{debug, trace, warn};

use crate::board::{Board, Cell, Pos};
use crate::config::EngineConfig;
use crate::eval::{Score, TerminalScore};
use crate::search::{Clock, Deadline, Minimax, SystemClock};

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Score of the chosen candidate, from `MarkB`'s side
    pub score: Score,
    /// Time spent, measured on the engine's clock
    pub elapsed: Duration,
    /// Number of nodes searched
    pub nodes: u64,
    /// Search frames cut short by the deadline
    pub deadline_cutoffs: u64,
}

impl MoveResult {
    /// Result for a position with nothing to play
    #[inline]
    fn no_move(elapsed: Duration) -> Self {
        Self {
            best_move: None,
            score: TerminalScore::NEUTRAL,
            elapsed,
            nodes: 0,
            deadline_cutoffs: 0,
        }
    }

    /// Time taken in milliseconds
    #[inline]
    pub fn time_ms(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }

    /// True if the deadline cut any part of the search short
    #[inline]
    pub fn timed_out(&self) -> bool {
        self.deadline_cutoffs > 0
    }
}

/// Automated player.
///
/// Holds the search configuration and the clock used for deadlines. The
/// clock defaults to the system clock; tests inject a manual one.
#[derive(Debug, Clone)]
pub struct AIEngine<C: Clock = SystemClock> {
    config: EngineConfig,
    clock: C,
}

impl AIEngine<SystemClock> {
    /// Engine with the default configuration (depth 1, 3 second budget).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for AIEngine<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> AIEngine<C> {
    #[must_use]
    pub fn with_clock(config: EngineConfig, clock: C) -> Self {
        if let Err(e) = config.validate() {
            warn!("engine built with {config:?}: {e}");
        }
        Self { config, clock }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn set_depth(&mut self, depth: u32) {
        self.config.depth = depth;
    }

    pub fn set_time_limit(&mut self, time_limit_ms: u64) {
        self.config.time_limit_ms = time_limit_ms;
    }

    /// Best move for `mark`, or `None` when the board has no empty cell.
    #[must_use]
    pub fn best_move(&self, board: &Board, mark: Cell) -> Option<Pos> {
        self.best_move_with_stats(board, mark).best_move
    }

    /// Best move for `mark` with search statistics.
    ///
    /// The caller's board is never touched: candidates are tried on a
    /// private copy. The deadline is computed once, here, and shared by
    /// every candidate's search.
    ///
    /// `MarkB` keeps the candidate with the greatest score and searches with
    /// `MarkA` to move next. `MarkA` is the mirror image. Ties keep the
    /// earliest candidate in row-major order.
    #[must_use]
    pub fn best_move_with_stats(&self, board: &Board, mark: Cell) -> MoveResult {
        let start = self.clock.now();

        if !mark.is_mark() {
            warn!("move requested for an empty cell value");
            return MoveResult::no_move(Duration::ZERO);
        }

        let deadline = Deadline::after(start, self.config.time_limit());
        let mut search = Minimax::new(&self.clock, deadline);
        let engine_maximizes = mark == Cell::MarkB;

        let mut work = board.clone();
        let mut best: Option<(Pos, Score)> = None;

        for pos in board.empty_cells() {
            let Some(mut placed) = work.tentative(pos, mark) else {
                continue;
            };
            let score = search.search(&mut placed, self.config.depth, !engine_maximizes);
            drop(placed);
            trace!("candidate {pos} for {mark}: {score}");

            let improves = match best {
                None => true,
                Some((_, best_score)) if engine_maximizes => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((pos, score));
            }
        }

        let elapsed = self.clock.now().saturating_duration_since(start);
        let stats = search.stats();
        let result = match best {
            Some((pos, score)) => MoveResult {
                best_move: Some(pos),
                score,
                elapsed,
                nodes: stats.nodes,
                deadline_cutoffs: stats.deadline_cutoffs,
            },
            None => MoveResult::no_move(elapsed),
        };

        debug!(
            "{mark} plays {:?} (score {}, {} nodes, {} cutoffs, {}ms)",
            result.best_move,
            result.score,
            result.nodes,
            result.deadline_cutoffs,
            result.time_ms()
        );
        result
    }
}
