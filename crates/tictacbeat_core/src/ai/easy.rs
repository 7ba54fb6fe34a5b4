//! Uniform-random opponent.

use super::Opponent;
use crate::board::{Board, Coord};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, instrument};

/// Builds a fresh generator seeded from the wall clock.
pub fn wall_clock_rng() -> StdRng {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default();
    StdRng::seed_from_u64(nanos)
}

/// Picks a uniformly random empty cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct EasyAi;

impl EasyAi {
    /// Creates the opponent.
    pub fn new() -> Self {
        Self
    }

    /// Rejection-samples random coordinates from `rng` until one is empty.
    pub fn choose_move_with<R: Rng>(&self, board: &Board, rng: &mut R) -> Option<Coord> {
        if board.is_full() {
            return None;
        }
        loop {
            let at = Coord::new(
                rng.random_range(0..Board::SIZE),
                rng.random_range(0..Board::SIZE),
            );
            if board.is_empty(at) {
                return Some(at);
            }
        }
    }
}

impl Opponent for EasyAi {
    /// Draws from a generator seeded fresh for this call.
    #[instrument(skip(self, board))]
    fn choose_move(&self, board: &Board) -> Option<Coord> {
        let at = self.choose_move_with(board, &mut wall_clock_rng())?;
        debug!(x = at.x, y = at.y, "Easy AI chose cell");
        Some(at)
    }

    fn name(&self) -> &str {
        "Easy AI"
    }
}
