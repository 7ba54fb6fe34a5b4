//! Win detection.

use super::super::{Board, Cell, Coord, WinningLine};

const fn c(x: usize, y: usize) -> Coord {
    Coord::new(x, y)
}

/// Every line of three, in scan order.
///
/// Rows are the lines with a fixed `x` (`x` = 0, 1, 2), columns the lines
/// with a fixed `y`, then the `\` diagonal and the `/` diagonal. Within a
/// line the cells are listed by increasing second index.
pub const LINES: [[Coord; 3]; 8] = [
    // Rows
    [c(0, 0), c(0, 1), c(0, 2)],
    [c(1, 0), c(1, 1), c(1, 2)],
    [c(2, 0), c(2, 1), c(2, 2)],
    // Columns
    [c(0, 0), c(1, 0), c(2, 0)],
    [c(0, 1), c(1, 1), c(2, 1)],
    [c(0, 2), c(1, 2), c(2, 2)],
    // Diagonals
    [c(0, 0), c(1, 1), c(2, 2)],
    [c(0, 2), c(1, 1), c(2, 0)],
];

/// Returns the first completed line in [`LINES`] order.
///
/// Boards with several completed lines (not reachable in normal play)
/// resolve to whichever comes first in the scan.
pub fn check_winner(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&[first, second, third]| {
        let cell = board.get(first);
        match cell {
            Cell::Occupied(symbol) if cell == board.get(second) && cell == board.get(third) => {
                Some(WinningLine::new(symbol, [first, second, third]))
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::super::super::Symbol;
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_row() {
        let mut board = Board::new();
        for y in 0..3 {
            board.place(Coord::new(1, y), Symbol::X);
        }
        let line = check_winner(&board).expect("row should win");
        assert_eq!(line.symbol, Symbol::X);
        assert_eq!(line.cells, [c(1, 0), c(1, 1), c(1, 2)]);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.place(c(0, 2), Symbol::O);
        board.place(c(1, 1), Symbol::O);
        board.place(c(2, 0), Symbol::O);
        let line = check_winner(&board).expect("diagonal should win");
        assert_eq!(line.symbol, Symbol::O);
        assert_eq!(line.cells, [c(0, 2), c(1, 1), c(2, 0)]);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.place(c(0, 0), Symbol::X);
        board.place(c(0, 1), Symbol::O);
        board.place(c(0, 2), Symbol::X);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_rows_scanned_before_columns() {
        // Row x = 2 and column y = 0 are both complete.
        let mut board = Board::new();
        for at in [c(2, 0), c(2, 1), c(2, 2), c(0, 0), c(1, 0)] {
            board.place(at, Symbol::X);
        }
        let line = check_winner(&board).expect("forced board has a line");
        assert_eq!(line.cells, [c(2, 0), c(2, 1), c(2, 2)]);
    }
}
