//! Shared fixtures for unit tests

use proptest::prelude::*;

use crate::board::{Board, Cell, Pos, TOTAL_CELLS};

/// Random board: each cell independently empty, `MarkA` or `MarkB`.
pub fn arb_board() -> impl Strategy<Value = Board> {
    prop::collection::vec(0u8..3, TOTAL_CELLS).prop_map(|cells| {
        let mut board = Board::new();
        for (idx, c) in cells.into_iter().enumerate() {
            let mark = match c {
                1 => Cell::MarkA,
                2 => Cell::MarkB,
                _ => continue,
            };
            let pos = Pos::from_index(idx);
            board.place(pos.row as i32, pos.col as i32, mark);
        }
        board
    })
}

/// Full board with no five-in-a-row for either mark.
///
/// Pairs of columns alternate and the pattern shifts one step per row.
pub fn drawn_board() -> Board {
    let mut board = Board::new();
    for row in 0..8i32 {
        for col in 0..8i32 {
            let mark = if (col / 2 + row) % 2 == 0 {
                Cell::MarkA
            } else {
                Cell::MarkB
            };
            board.place(row, col, mark);
        }
    }
    board
}

/// Board built from `(row, col, mark)` triples.
pub fn board_with(cells: &[(i32, i32, Cell)]) -> Board {
    let mut board = Board::new();
    for &(row, col, mark) in cells {
        assert!(board.place(row, col, mark), "fixture cell ({row}, {col}) rejected");
    }
    board
}
