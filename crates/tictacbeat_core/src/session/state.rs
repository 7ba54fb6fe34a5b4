//! Session phases, modes and round outcomes.

use crate::board::{Symbol, WinningLine};
use serde::{Deserialize, Serialize};

/// Phase of the session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Mode selection.
    Menu,
    /// Countdown before the round.
    Loading,
    /// Round in progress.
    Playing,
    /// Round finished, waiting for a restart.
    GameOver,
}

/// Who supplies the current player's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerType {
    /// Moves come from keyboard or pointer input.
    Human,
    /// Moves come from an [`Opponent`](crate::Opponent).
    Ai,
}

impl PlayerType {
    /// Returns the other player type.
    pub fn toggle(self) -> Self {
        match self {
            Self::Human => Self::Ai,
            Self::Ai => Self::Human,
        }
    }
}

/// Game mode, picked in the menu and fixed for the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum GameMode {
    /// Two humans sharing the keyboard.
    Classic,
    /// Human against the random opponent.
    EasyAi,
    /// Human against the minimax opponent.
    HardAi,
    /// Two humans placing on the beat, three symbols each at most.
    Rhythm,
}

impl GameMode {
    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Classic => "PvP - Classic",
            Self::EasyAi => "Easy",
            Self::HardAi => "Hard",
            Self::Rhythm => "Rhythm",
        }
    }

    /// Key that selects this mode in the menu.
    pub fn menu_key(self) -> char {
        match self {
            Self::Classic => '1',
            Self::EasyAi => '2',
            Self::HardAi => '3',
            Self::Rhythm => '4',
        }
    }

    /// True if the player type stays fixed when the turn passes.
    pub fn pins_player_type(self) -> bool {
        matches!(self, Self::Classic | Self::Rhythm)
    }
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// A symbol completed a line.
    Won(WinningLine),
    /// The board filled with no line.
    Draw,
    /// The rhythm track ran out; the higher score wins, `None` on a tie.
    OnPoints(Option<Symbol>),
}

impl Outcome {
    /// The winning symbol, if any.
    pub fn winner(&self) -> Option<Symbol> {
        match self {
            Self::Won(line) => Some(line.symbol),
            Self::Draw => None,
            Self::OnPoints(leader) => *leader,
        }
    }

    /// Game-over banner text.
    pub fn message(&self) -> String {
        match self {
            Self::Won(line) => format!("{} wins!", line.symbol),
            Self::Draw => "It's a draw!".to_string(),
            Self::OnPoints(Some(symbol)) => format!("{} wins on points!", symbol),
            Self::OnPoints(None) => "Score draw!".to_string(),
        }
    }
}
