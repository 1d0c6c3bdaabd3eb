//! End-to-end scenarios through the public API

use magnetic_cave::eval::evaluate;
use magnetic_cave::rules::game_status;
use magnetic_cave::search::{Deadline, ManualClock, Minimax};
use magnetic_cave::{has_five_in_row, AIEngine, Board, Cell, EngineConfig, GameStatus, Pos};

fn engine() -> AIEngine<ManualClock> {
    AIEngine::with_clock(EngineConfig::default(), ManualClock::new())
}

#[test]
fn row_of_five_wins_until_interrupted() {
    let mut board = Board::new();
    for col in 0..5 {
        assert!(board.place(0, col, Cell::MarkA));
    }
    assert!(has_five_in_row(&board, Cell::MarkA));

    let mut interrupted = Board::new();
    for col in [0, 1, 3, 4] {
        interrupted.place(0, col, Cell::MarkA);
    }
    interrupted.place(0, 2, Cell::MarkB);
    assert!(!has_five_in_row(&interrupted, Cell::MarkA));
}

#[test]
fn second_player_row_scores_plus_one() {
    let mut board = Board::new();
    for col in 0..5 {
        board.place(3, col, Cell::MarkB);
    }
    assert!(!board.is_full());
    assert_eq!(evaluate(&board), 1);
    assert_eq!(game_status(&board), GameStatus::Win(Cell::MarkB));
}

#[test]
fn full_board_without_five_is_a_draw() {
    let mut board = Board::new();
    for row in 0..8 {
        for col in 0..8 {
            let mark = if (col / 2 + row) % 2 == 0 {
                Cell::MarkA
            } else {
                Cell::MarkB
            };
            assert!(board.place(row, col, mark));
        }
    }
    assert!(board.is_full());
    assert!(!has_five_in_row(&board, Cell::MarkA));
    assert!(!has_five_in_row(&board, Cell::MarkB));
    assert_eq!(game_status(&board), GameStatus::Draw);

    // One hole left: the engine must take it
    board.clear(6, 1);
    assert_eq!(engine().best_move(&board, Cell::MarkB), Some(Pos::new(6, 1)));
}

#[test]
fn depth_zero_search_is_static_evaluation() {
    let mut board = Board::new();
    for row in 2..7 {
        board.place(row, 2, Cell::MarkA);
    }
    let clock = ManualClock::new();
    for maximizing in [true, false] {
        let mut search = Minimax::new(&clock, Deadline::never());
        assert_eq!(search.search(&mut board, 0, maximizing), evaluate(&board));
    }
}

#[test]
fn engine_versus_engine_game_terminates() {
    // Both sides driven by the engine: every move is legal and the game ends
    let engine = engine();
    let mut board = Board::new();
    let mut mark = Cell::MarkA;
    let status = loop {
        let before = board.clone();
        let pos = engine.best_move(&board, mark).expect("board not full");
        assert_eq!(board, before);
        assert!(board.place(pos.row as i32, pos.col as i32, mark));
        let status = game_status(&board);
        if status.is_over() {
            break status;
        }
        mark = mark.opponent();
    };
    assert!(matches!(status, GameStatus::Win(_) | GameStatus::Draw));
}
