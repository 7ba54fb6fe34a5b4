//! Exhaustive minimax search.
//!
//! The 3x3 tree holds at most 9! leaves, so the search runs to full depth
//! with no pruning and no transposition table.

use super::Opponent;
use crate::board::{Board, Coord, Symbol};
use tracing::{debug, instrument};

/// Magnitude of a terminal win before the depth adjustment.
pub const WIN_SCORE: i32 = 10;

/// Full-depth minimax player maximizing for one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    maximizing: Symbol,
}

impl Minimax {
    /// Creates a search that maximizes for `maximizing`.
    pub fn new(maximizing: Symbol) -> Self {
        Self { maximizing }
    }

    /// Scores `board` with the maximizing side to move if `maximizing_to_move`.
    ///
    /// A win for the maximizing symbol scores `WIN_SCORE - depth`, a loss
    /// `depth - WIN_SCORE` and a draw `0`, where `depth` counts the
    /// placements made from `board`. The board is not modified.
    #[instrument(skip(board), fields(position = %board))]
    pub fn evaluate(&self, board: &Board, maximizing_to_move: bool) -> i32 {
        let mut scratch = board.clone();
        self.search(&mut scratch, 0, maximizing_to_move)
    }

    fn search(&self, board: &mut Board, depth: i32, maximizing: bool) -> i32 {
        if let Some(line) = board.check_winner() {
            return if line.symbol == self.maximizing {
                WIN_SCORE - depth
            } else {
                depth - WIN_SCORE
            };
        }
        if board.is_full() {
            return 0;
        }

        let symbol = if maximizing {
            self.maximizing
        } else {
            self.maximizing.opponent()
        };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for at in Board::coords() {
            if !board.is_empty(at) {
                continue;
            }
            board.place(at, symbol);
            let score = self.search(board, depth + 1, !maximizing);
            board.remove(at);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }

    /// Returns the highest-scoring empty cell with `(cell, score)`.
    ///
    /// Equal scores keep the first cell in [`Board::coords`] order.
    pub fn best_move(&self, board: &Board) -> Option<(Coord, i32)> {
        let mut scratch = board.clone();
        let mut best: Option<(Coord, i32)> = None;
        for at in Board::coords() {
            if !scratch.is_empty(at) {
                continue;
            }
            scratch.place(at, self.maximizing);
            let score = self.search(&mut scratch, 1, false);
            scratch.remove(at);
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((at, score));
            }
        }
        best
    }
}

impl Opponent for Minimax {
    #[instrument(skip(self, board), fields(symbol = %self.maximizing))]
    fn choose_move(&self, board: &Board) -> Option<Coord> {
        let (at, score) = self.best_move(board)?;
        debug!(x = at.x, y = at.y, score, "Minimax chose cell");
        Some(at)
    }

    fn name(&self) -> &str {
        "Hard AI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_immediate_win() {
        let mut board = Board::new();
        board.place(Coord::new(0, 0), Symbol::X);
        board.place(Coord::new(0, 1), Symbol::X);
        board.place(Coord::new(1, 0), Symbol::O);
        board.place(Coord::new(1, 1), Symbol::O);
        let ai = Minimax::new(Symbol::X);
        assert_eq!(ai.best_move(&board), Some((Coord::new(0, 2), 9)));
    }

    #[test]
    fn test_blocks_opponent_line() {
        let mut board = Board::new();
        board.place(Coord::new(0, 0), Symbol::X);
        board.place(Coord::new(0, 1), Symbol::X);
        board.place(Coord::new(2, 2), Symbol::O);
        let ai = Minimax::new(Symbol::O);
        assert_eq!(ai.choose_move(&board), Some(Coord::new(0, 2)));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::new();
        for at in Board::coords() {
            board.place(at, Symbol::O);
        }
        assert_eq!(Minimax::new(Symbol::X).choose_move(&board), None);
    }
}
