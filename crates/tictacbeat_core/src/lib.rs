//! Tic Tac Beat game core.
//!
//! Tic-tac-toe with three opponents and a rhythm variant, independent of
//! any window, terminal or sound system.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid, win and draw detection
//! - **AI**: random and perfect-play minimax opponents
//! - **Rhythm**: beat schedule, timing scores, three-symbol window
//! - **Session**: menu, countdown, rounds and scores, driven by a front end
//!   through the [`Clock`], [`AudioPlayer`], [`InputSource`] and
//!   [`Renderer`] traits
//!
//! # Example
//!
//! ```
//! use tictacbeat_core::{Board, Coord, Minimax, Opponent, Symbol};
//!
//! let mut board = Board::new();
//! board.place(Coord::new(0, 0), Symbol::X);
//! board.place(Coord::new(0, 1), Symbol::X);
//!
//! let ai = Minimax::new(Symbol::X);
//! assert_eq!(ai.choose_move(&board), Some(Coord::new(0, 2)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod ai;
pub mod board;
mod error;
pub mod rhythm;
pub mod session;

// Crate-level exports - Board
pub use board::{Board, Cell, Coord, Symbol, WinningLine};

// Crate-level exports - Opponents
pub use ai::{EasyAi, Minimax, Opponent};

// Crate-level exports - Rhythm
pub use rhythm::{Beat, Beatmap, BeatmapSource, Judgement, MoveWindow, RhythmEngine, WindowUpdate};

// Crate-level exports - Session
pub use session::{
    AudioPlayer, Clock, GameMode, GameSession, GameState, InputSource, Key, Outcome, PlayerType,
    Renderer, SessionConfig, SystemClock, TextRole, TickOutcome,
};

// Crate-level exports - Errors
pub use error::{AudioError, BeatmapError, RhythmError, SessionError};
