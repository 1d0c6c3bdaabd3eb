//! Board structure with scoped tentative placement

use std::fmt;
use std::ops::{Deref, DerefMut};

use super::bitboard::{Bitboard, BitboardIter};
use super::{Cell, Pos, BOARD_SIZE};
use crate::error::{Error, Result};

/// Game board: one bitboard per mark.
///
/// A cell only moves `Empty -> Mark` through [`Board::place`] and
/// `Mark -> Empty` through [`Board::clear`]. Occupied cells are never
/// overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// First player's marks
    mark_a: Bitboard,
    /// Second player's marks
    mark_b: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            mark_a: Bitboard::new(),
            mark_b: Bitboard::new(),
        }
    }

    /// Get cell at position. Off-board positions read as `Empty`.
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        if self.mark_a.get(pos) {
            Cell::MarkA
        } else if self.mark_b.get(pos) {
            Cell::MarkB
        } else {
            Cell::Empty
        }
    }

    /// Check if position is an empty cell of this board
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        pos.on_board() && !self.occupied().get(pos)
    }

    /// Place a mark. Succeeds only for an in-range, empty cell and a real mark;
    /// otherwise the board is left untouched.
    #[inline]
    pub fn place(&mut self, row: i32, col: i32, mark: Cell) -> bool {
        match Pos::checked(row, col) {
            Some(pos) => self.try_place(pos, mark).is_ok(),
            None => false,
        }
    }

    /// Same rule as [`Board::place`], reporting why a move was rejected.
    pub fn try_place(&mut self, pos: Pos, mark: Cell) -> Result<()> {
        if !pos.on_board() {
            return Err(Error::OutOfRange {
                row: pos.row as i32,
                col: pos.col as i32,
            });
        }
        if !self.is_empty(pos) {
            return Err(Error::Occupied {
                row: pos.row,
                col: pos.col,
            });
        }
        match self.marks_mut(mark) {
            Some(bb) => {
                bb.set(pos);
                Ok(())
            }
            None => Err(Error::NotAMark),
        }
    }

    /// Force a cell back to empty. Out-of-range coordinates are ignored.
    #[inline]
    pub fn clear(&mut self, row: i32, col: i32) {
        if let Some(pos) = Pos::checked(row, col) {
            self.clear_pos(pos);
        }
    }

    /// Empty the cell at `pos`. Off-board positions are ignored.
    #[inline]
    pub fn clear_pos(&mut self, pos: Pos) {
        self.mark_a.clear(pos);
        self.mark_b.clear(pos);
    }

    /// Place `mark` at `pos` for the lifetime of the returned guard.
    ///
    /// The guard derefs to the board and clears `pos` when dropped, so the
    /// undo happens on every exit path. Returns `None` if the placement
    /// is illegal.
    #[must_use]
    pub fn tentative(&mut self, pos: Pos, mark: Cell) -> Option<Tentative<'_>> {
        self.try_place(pos, mark).ok()?;
        Some(Tentative { board: self, pos })
    }

    /// True iff no cell is empty
    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied().is_full()
    }

    /// Empty cells in row-major order
    #[inline]
    pub fn empty_cells(&self) -> BitboardIter {
        self.occupied().complement().iter_ones()
    }

    /// Get bitboard for a mark (returns None for Empty)
    #[inline]
    pub fn marks(&self, mark: Cell) -> Option<&Bitboard> {
        match mark {
            Cell::MarkA => Some(&self.mark_a),
            Cell::MarkB => Some(&self.mark_b),
            Cell::Empty => None,
        }
    }

    #[inline]
    fn marks_mut(&mut self, mark: Cell) -> Option<&mut Bitboard> {
        match mark {
            Cell::MarkA => Some(&mut self.mark_a),
            Cell::MarkB => Some(&mut self.mark_b),
            Cell::Empty => None,
        }
    }

    #[inline]
    fn occupied(&self) -> Bitboard {
        self.mark_a.union(self.mark_b)
    }

    /// Total marks on board
    #[inline]
    pub fn mark_count(&self) -> u32 {
        self.mark_a.count() + self.mark_b.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.mark_a.is_empty() && self.mark_b.is_empty()
    }
}

/// One row per line, cells separated by a space, then a blank line.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", self.get(Pos::new(row, col)))?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}

/// A mark placed for the duration of one search frame.
pub struct Tentative<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl Tentative<'_> {
    /// Where the tentative mark sits
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for Tentative<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Tentative<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Tentative<'_> {
    fn drop(&mut self) {
        self.board.clear_pos(self.pos);
    }
}
