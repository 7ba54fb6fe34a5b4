//! Game rules for the 3x3 board.
//!
//! Pure functions over [`Board`](super::Board), kept apart from the board
//! storage so the AI search and the session share one definition of a win.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};
