//! Win and draw detection over whole boards.

use tictacbeat_core::board::rules::LINES;
use tictacbeat_core::{Board, Coord, Symbol};

fn board_with(cells: &[(usize, usize, Symbol)]) -> Board {
    let mut board = Board::new();
    for &(x, y, symbol) in cells {
        board.place(Coord::new(x, y), symbol);
    }
    board
}

#[test]
fn test_every_line_is_detected_for_both_symbols() {
    for symbol in [Symbol::O, Symbol::X] {
        for line in LINES {
            let mut board = Board::new();
            for at in line {
                board.place(at, symbol);
            }
            let winner = board.check_winner().expect("line should win");
            assert_eq!(winner.symbol, symbol);
            assert_eq!(winner.cells, line);
        }
    }
}

#[test]
fn test_mixed_line_does_not_win() {
    let board = board_with(&[
        (0, 0, Symbol::X),
        (1, 1, Symbol::X),
        (2, 2, Symbol::O),
    ]);
    assert!(board.check_winner().is_none());
}

#[test]
fn test_empty_board_has_no_winner_and_is_not_full() {
    let board = Board::new();
    assert!(board.check_winner().is_none());
    assert!(!board.is_full());
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    let board = board_with(&[
        (0, 0, Symbol::X),
        (1, 0, Symbol::O),
        (2, 0, Symbol::X),
        (0, 1, Symbol::X),
        (1, 1, Symbol::O),
        (2, 1, Symbol::O),
        (0, 2, Symbol::O),
        (1, 2, Symbol::X),
        (2, 2, Symbol::X),
    ]);
    assert!(board.is_full());
    assert!(board.check_winner().is_none());
}

#[test]
fn test_win_on_last_cell_beats_full_board() {
    let board = board_with(&[
        (0, 0, Symbol::X),
        (1, 0, Symbol::O),
        (2, 0, Symbol::X),
        (0, 1, Symbol::O),
        (1, 1, Symbol::X),
        (2, 1, Symbol::O),
        (0, 2, Symbol::O),
        (1, 2, Symbol::X),
        (2, 2, Symbol::X),
    ]);
    assert!(board.is_full());
    let winner = board.check_winner().expect("diagonal wins");
    assert_eq!(winner.symbol, Symbol::X);
    assert_eq!(
        winner.cells,
        [Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)]
    );
}

#[test]
fn test_clear_empties_every_cell() {
    let mut board = board_with(&[(1, 1, Symbol::O), (2, 0, Symbol::X)]);
    board.clear();
    assert_eq!(board, Board::new());
    assert_eq!(board.empty_cells().count(), 9);
}
