//! Draw detection.

use super::super::Board;

/// True if every cell is occupied.
///
/// A full board with no winner is a draw.
pub fn is_full(board: &Board) -> bool {
    Board::coords().all(|at| !board.is_empty(at))
}

#[cfg(test)]
mod tests {
    use super::super::super::{Coord, Symbol};
    use super::super::win::check_winner;
    use super::*;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_one_gap_not_full() {
        let mut board = Board::new();
        for at in Board::coords().skip(1) {
            board.place(at, Symbol::O);
        }
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // Rows by x: X O X / X O O / O X X
        let mut board = Board::new();
        let layout = [
            [Symbol::X, Symbol::O, Symbol::X],
            [Symbol::X, Symbol::O, Symbol::O],
            [Symbol::O, Symbol::X, Symbol::X],
        ];
        for (x, row) in layout.iter().enumerate() {
            for (y, &symbol) in row.iter().enumerate() {
                board.place(Coord::new(x, y), symbol);
            }
        }
        assert!(is_draw(&board));
    }
}
