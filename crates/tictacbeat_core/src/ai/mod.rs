//! Computer opponents.

mod easy;
mod minimax;

pub use easy::{EasyAi, wall_clock_rng};
pub use minimax::{Minimax, WIN_SCORE};

use crate::board::{Board, Coord};

/// Trait for machine players that pick a cell to play.
pub trait Opponent {
    /// Picks an empty cell, or `None` if the board has no empty cell.
    fn choose_move(&self, board: &Board) -> Option<Coord>;

    /// Returns the opponent's display name.
    fn name(&self) -> &str;
}
