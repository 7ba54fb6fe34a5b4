//! Input keys and the fixed key-to-cell table.

use crate::board::Coord;

/// A key the session reacts to.
///
/// Front ends translate their native events into these; letters are
/// reported lower-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Start a round, or leave the game-over screen.
    Enter,
    /// Held to quit.
    Escape,
    /// A character key on the main block.
    Char(char),
    /// A digit on the numeric keypad.
    Keypad(u8),
}

/// Held in the menu or on the game-over screen to reset both scores.
pub const RESET_KEY: Key = Key::Char('r');
/// Held in any phase to quit.
pub const QUIT_KEY: Key = Key::Escape;
/// Starts a round from the menu and returns to it after a round.
pub const START_KEY: Key = Key::Enter;

const fn c(x: usize, y: usize) -> Coord {
    Coord::new(x, y)
}

/// Keys that place a symbol, with the cell each one targets.
///
/// The numeric keypad mirrors the board (7 is top-left); the letter block
/// `1 2 3 / q w e / a s d` does the same on the main keyboard. Front ends
/// that cannot tell keypad digits from top-row digits should only report
/// [`Key::Keypad`] when they can, leaving the letter block as the fallback.
pub const KEY_BINDINGS: [(Key, Coord); 18] = [
    (Key::Keypad(1), c(0, 2)),
    (Key::Keypad(2), c(1, 2)),
    (Key::Keypad(3), c(2, 2)),
    (Key::Keypad(4), c(0, 1)),
    (Key::Keypad(5), c(1, 1)),
    (Key::Keypad(6), c(2, 1)),
    (Key::Keypad(7), c(0, 0)),
    (Key::Keypad(8), c(1, 0)),
    (Key::Keypad(9), c(2, 0)),
    (Key::Char('a'), c(0, 2)),
    (Key::Char('s'), c(1, 2)),
    (Key::Char('d'), c(2, 2)),
    (Key::Char('q'), c(0, 1)),
    (Key::Char('w'), c(1, 1)),
    (Key::Char('e'), c(2, 1)),
    (Key::Char('1'), c(0, 0)),
    (Key::Char('2'), c(1, 0)),
    (Key::Char('3'), c(2, 0)),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn key_to_coord(key: Key) -> Option<Coord> {
        KEY_BINDINGS
            .iter()
            .find(|(bound, _)| *bound == key)
            .map(|(_, at)| *at)
    }

    #[test]
    fn test_keypad_mirrors_board() {
        assert_eq!(key_to_coord(Key::Keypad(7)), Some(Coord::new(0, 0)));
        assert_eq!(key_to_coord(Key::Keypad(5)), Some(Coord::new(1, 1)));
        assert_eq!(key_to_coord(Key::Keypad(3)), Some(Coord::new(2, 2)));
    }

    #[test]
    fn test_letter_block_matches_keypad() {
        for (letter, digit) in [('1', 7), ('w', 5), ('d', 3), ('a', 1)] {
            assert_eq!(
                key_to_coord(Key::Char(letter)),
                key_to_coord(Key::Keypad(digit))
            );
        }
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(key_to_coord(Key::Enter), None);
        assert_eq!(key_to_coord(Key::Char('4')), None);
        assert_eq!(key_to_coord(Key::Keypad(0)), None);
    }

    #[test]
    fn test_every_cell_reachable_from_each_block() {
        let keypad: HashSet<_> = KEY_BINDINGS[..9].iter().map(|(_, at)| *at).collect();
        let letters: HashSet<_> = KEY_BINDINGS[9..].iter().map(|(_, at)| *at).collect();
        assert_eq!(keypad.len(), 9);
        assert_eq!(keypad, letters);
    }
}
