//! One round of play
//!
//! A session is built at the start of a round and dropped at its end; the
//! replay loop makes a fresh one for every game.

use log::info;

use super::{GameMode, Seat};
use crate::board::{Board, Cell, Pos};
use crate::engine::{AIEngine, MoveResult};
use crate::error::{Error, Result};
use crate::rules::{game_status, GameStatus};
use crate::search::Clock;

/// Game state for one round
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    mode: GameMode,
    current_turn: Cell,
    status: GameStatus,
    move_history: Vec<(Pos, Cell)>,
}

impl GameSession {
    pub fn new(mode: GameMode) -> Self {
        info!("new game: {mode}");
        Self {
            board: Board::new(),
            mode,
            current_turn: mode.opening_mark(),
            status: GameStatus::InProgress,
            move_history: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[inline]
    pub fn current_turn(&self) -> Cell {
        self.current_turn
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn move_history(&self) -> &[(Pos, Cell)] {
        &self.move_history
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.move_history.last().map(|&(pos, _)| pos)
    }

    /// Who controls the side to move
    #[inline]
    pub fn current_seat(&self) -> Seat {
        self.mode.seat(self.current_turn)
    }

    /// Play `pos` for the side to move.
    ///
    /// Rejected moves leave the session unchanged. After a legal move the
    /// board is classified by [`game_status`]; while the game is in progress
    /// the turn passes. Play stops at the first five, so only the mover can
    /// hold one.
    pub fn play(&mut self, pos: Pos) -> Result<GameStatus> {
        if self.is_over() {
            return Err(Error::InvalidInput {
                input: format!("move {pos} after the game ended"),
            });
        }

        let mark = self.current_turn;
        self.board.try_place(pos, mark)?;
        self.move_history.push((pos, mark));

        self.status = game_status(&self.board);

        match self.status {
            GameStatus::InProgress => self.current_turn = mark.opponent(),
            GameStatus::Win(winner) => {
                info!("{winner} wins after {} moves", self.move_history.len())
            }
            GameStatus::Draw => info!("draw after {} moves", self.move_history.len()),
        }
        Ok(self.status)
    }

    /// Play coordinates typed by a human
    pub fn play_coords(&mut self, row: i32, col: i32) -> Result<GameStatus> {
        let pos = Pos::checked(row, col).ok_or(Error::OutOfRange { row, col })?;
        self.play(pos)
    }

    /// Ask `engine` for the side to move and commit its choice.
    ///
    /// Returns the search result alongside the new status. A result with no
    /// move leaves the session unchanged.
    pub fn play_engine<C: Clock>(
        &mut self,
        engine: &AIEngine<C>,
    ) -> Result<(MoveResult, GameStatus)> {
        let result = engine.best_move_with_stats(&self.board, self.current_turn);
        let status = match result.best_move {
            Some(pos) => self.play(pos)?,
            None => self.status,
        };
        Ok((result, status))
    }
}
