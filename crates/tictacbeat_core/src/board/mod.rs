//! Board model: cells, coordinates and the win/draw rules.

pub mod rules;
mod types;

pub use types::{Board, Cell, Coord, Symbol, WinningLine};
