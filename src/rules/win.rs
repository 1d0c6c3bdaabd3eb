//! Win condition checking for Magnetic Cave
//!
//! A player wins with five of their marks in a row along a row, a column,
//! or either diagonal. Longer lines contain a five-window and also win.

use crate::board::{Board, Cell, Pos, BOARD_SIZE};

/// Length of a winning line
pub const WIN_LENGTH: usize = 5;

/// Last start index for a five-cell window on one axis (0..=3)
const LAST_START: usize = BOARD_SIZE - WIN_LENGTH;

/// Status of a game after a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Win(Cell),
    Draw,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Five cells starting at `(row, col)` stepping by `(dr, dc)` all hold `mark`.
#[inline]
fn window_is(board: &Board, mark: Cell, row: usize, col: usize, dr: isize, dc: isize) -> bool {
    (0..WIN_LENGTH as isize).all(|i| {
        let r = (row as isize + dr * i) as u8;
        let c = (col as isize + dc * i) as u8;
        board.get(Pos::new(r, c)) == mark
    })
}

/// Check if there's five in a row for the given mark.
///
/// Scans every row and column window, plus the 16 down-right windows and
/// the 16 down-left windows whose top row and left column start in 0..=3.
/// No allocation. Always false for `Cell::Empty`.
pub fn has_five_in_row(board: &Board, mark: Cell) -> bool {
    if !mark.is_mark() {
        return false;
    }

    // Rows
    for row in 0..BOARD_SIZE {
        for col in 0..=LAST_START {
            if window_is(board, mark, row, col, 0, 1) {
                return true;
            }
        }
    }

    // Columns
    for col in 0..BOARD_SIZE {
        for row in 0..=LAST_START {
            if window_is(board, mark, row, col, 1, 0) {
                return true;
            }
        }
    }

    // Diagonals
    for row in 0..=LAST_START {
        for col in 0..=LAST_START {
            if window_is(board, mark, row, col, 1, 1)
                || window_is(board, mark, row, col + WIN_LENGTH - 1, 1, -1)
            {
                return true;
            }
        }
    }

    false
}

/// Classify the board after a move.
///
/// `MarkB` is checked before `MarkA`, matching the evaluator's tie-break.
pub fn game_status(board: &Board) -> GameStatus {
    for mark in [Cell::MarkB, Cell::MarkA] {
        if has_five_in_row(board, mark) {
            return GameStatus::Win(mark);
        }
    }
    if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{arb_board, drawn_board};
    use proptest::prelude::*;

    fn place_all(board: &mut Board, cells: &[(i32, i32)], mark: Cell) {
        for &(r, c) in cells {
            assert!(board.place(r, c, mark));
        }
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        place_all(&mut board, &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)], Cell::MarkA);
        assert!(has_five_in_row(&board, Cell::MarkA));
        assert!(!has_five_in_row(&board, Cell::MarkB));
    }

    #[test]
    fn test_interrupted_row_not_win() {
        let mut board = Board::new();
        place_all(&mut board, &[(0, 0), (0, 1), (0, 3), (0, 4)], Cell::MarkA);
        place_all(&mut board, &[(0, 2)], Cell::MarkB);
        assert!(!has_five_in_row(&board, Cell::MarkA));
        assert!(!has_five_in_row(&board, Cell::MarkB));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new();
        for i in 3..8 {
            board.place(i, 6, Cell::MarkB);
        }
        assert!(has_five_in_row(&board, Cell::MarkB));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place(3 + i, 3 + i, Cell::MarkB);
        }
        assert!(has_five_in_row(&board, Cell::MarkB));
    }

    #[test]
    fn test_five_in_row_anti_diagonal() {
        let mut board = Board::new();
        // (3,7) down-left to (7,3)
        for i in 0..5 {
            board.place(3 + i, 7 - i, Cell::MarkA);
        }
        assert!(has_five_in_row(&board, Cell::MarkA));
    }

    #[test]
    fn test_anti_diagonal_from_top_left_region() {
        let mut board = Board::new();
        // (0,4) down-left to (4,0)
        for i in 0..5 {
            board.place(i, 4 - i, Cell::MarkB);
        }
        assert!(has_five_in_row(&board, Cell::MarkB));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let mut board = Board::new();
        for i in 1..7 {
            board.place(5, i, Cell::MarkA);
        }
        assert!(has_five_in_row(&board, Cell::MarkA));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = Board::new();
        for i in 4..8 {
            board.place(7, i, Cell::MarkA);
        }
        assert!(!has_five_in_row(&board, Cell::MarkA));
    }

    #[test]
    fn test_empty_not_five() {
        let board = Board::new();
        assert!(!has_five_in_row(&board, Cell::MarkA));
        assert!(!has_five_in_row(&board, Cell::MarkB));
        assert!(!has_five_in_row(&board, Cell::Empty));
        assert_eq!(game_status(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_full_board_draw() {
        let board = drawn_board();
        assert!(board.is_full());
        assert!(!has_five_in_row(&board, Cell::MarkA));
        assert!(!has_five_in_row(&board, Cell::MarkB));
        assert_eq!(game_status(&board), GameStatus::Draw);
    }

    #[test]
    fn test_status_win() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place(3, i, Cell::MarkB);
        }
        assert_eq!(game_status(&board), GameStatus::Win(Cell::MarkB));
        assert!(game_status(&board).is_over());
    }

    #[test]
    fn test_status_prefers_mark_b() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place(0, i, Cell::MarkA);
            board.place(1, i, Cell::MarkB);
        }
        assert_eq!(game_status(&board), GameStatus::Win(Cell::MarkB));
    }

    /// Reference scan: walk every cell in every direction.
    fn brute_force_five(board: &Board, mark: Cell) -> bool {
        let dirs = [(0i32, 1i32), (1, 0), (1, 1), (1, -1)];
        for idx in 0..64 {
            let start = Pos::from_index(idx);
            for (dr, dc) in dirs {
                let hit = (0..5).all(|i| {
                    let r = start.row as i32 + dr * i;
                    let c = start.col as i32 + dc * i;
                    Pos::checked(r, c).map_or(false, |p| board.get(p) == mark)
                });
                if hit {
                    return true;
                }
            }
        }
        false
    }

    proptest! {
        #[test]
        fn prop_matches_brute_force(board in arb_board()) {
            for mark in [Cell::MarkA, Cell::MarkB] {
                prop_assert_eq!(has_five_in_row(&board, mark), brute_force_five(&board, mark));
            }
        }
    }
}
