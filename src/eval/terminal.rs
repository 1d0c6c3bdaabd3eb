//! Terminal evaluation

use crate::board::{Board, Cell};
use crate::rules::has_five_in_row;

/// Signed evaluation, positive favours `MarkB`.
pub type Score = i32;

/// Scores the evaluator can produce
pub struct TerminalScore;

impl TerminalScore {
    /// `MarkB` has five in a row
    pub const MARK_B_WINS: Score = 1;
    /// `MarkA` has five in a row
    pub const MARK_A_WINS: Score = -1;
    /// Draw, or no result yet at the search horizon
    pub const NEUTRAL: Score = 0;
}

/// Evaluate the board from `MarkB`'s perspective.
///
/// `MarkB` is checked first: if both marks somehow hold a five (not reachable
/// when play stops at the first win) the result is `MARK_B_WINS`.
#[must_use]
pub fn evaluate(board: &Board) -> Score {
    if has_five_in_row(board, Cell::MarkB) {
        TerminalScore::MARK_B_WINS
    } else if has_five_in_row(board, Cell::MarkA) {
        TerminalScore::MARK_A_WINS
    } else {
        TerminalScore::NEUTRAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{arb_board, board_with, drawn_board};
    use proptest::prelude::*;

    #[test]
    fn test_empty_board_neutral() {
        assert_eq!(evaluate(&Board::new()), TerminalScore::NEUTRAL);
    }

    #[test]
    fn test_mark_b_row_wins() {
        let board = board_with(&[
            (3, 0, Cell::MarkB),
            (3, 1, Cell::MarkB),
            (3, 2, Cell::MarkB),
            (3, 3, Cell::MarkB),
            (3, 4, Cell::MarkB),
            (0, 0, Cell::MarkA),
        ]);
        assert!(!board.is_full());
        assert_eq!(evaluate(&board), 1);
    }

    #[test]
    fn test_mark_a_column_loses() {
        let mut board = Board::new();
        for row in 2..7 {
            board.place(row, 5, Cell::MarkA);
        }
        assert_eq!(evaluate(&board), -1);
    }

    #[test]
    fn test_both_fives_prefers_mark_b() {
        let mut board = Board::new();
        for col in 0..5 {
            board.place(6, col, Cell::MarkA);
            board.place(7, col, Cell::MarkB);
        }
        assert_eq!(evaluate(&board), TerminalScore::MARK_B_WINS);
    }

    #[test]
    fn test_draw_is_neutral() {
        assert_eq!(evaluate(&drawn_board()), TerminalScore::NEUTRAL);
    }

    proptest! {
        #[test]
        fn prop_evaluate_follows_detector(board in arb_board()) {
            let expected = if has_five_in_row(&board, Cell::MarkB) {
                1
            } else if has_five_in_row(&board, Cell::MarkA) {
                -1
            } else {
                0
            };
            prop_assert_eq!(evaluate(&board), expected);
        }
    }
}
