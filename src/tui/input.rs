//! Translates terminal events into per-tick session input.

use super::ui::BoardGeometry;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};
use tictacbeat_core::{Coord, InputSource, Key};
use tracing::{debug, trace};

/// Without release events a key counts as released once no press or
/// repeat has arrived for this long. Covers the usual autorepeat delay.
const RELEASE_TIMEOUT: Duration = Duration::from_millis(550);

#[derive(Debug, Clone, Copy)]
struct HeldKey {
    ticks: u32,
    last_seen: Instant,
}

/// Key and pointer state accumulated between two session ticks.
#[derive(Debug)]
pub struct InputTracker {
    held: HashMap<Key, HeldKey>,
    just_pressed: HashSet<Key>,
    pointer: Option<Coord>,
    reports_release: bool,
}

impl InputTracker {
    /// Creates a tracker. `reports_release` is true when the terminal sends
    /// key release events.
    pub fn new(reports_release: bool) -> Self {
        Self {
            held: HashMap::new(),
            just_pressed: HashSet::new(),
            pointer: None,
            reports_release,
        }
    }

    /// Feeds one terminal event.
    ///
    /// Mouse presses are resolved against `geometry`, the board layout of
    /// the last frame.
    pub fn handle_event(&mut self, event: &Event, now: Instant, geometry: Option<&BoardGeometry>) {
        match event {
            Event::Key(key_event) => {
                let Some(key) = translate_key(key_event) else {
                    return;
                };
                match key_event.kind {
                    KeyEventKind::Press => self.press(key, now),
                    KeyEventKind::Repeat => {
                        if let Some(held) = self.held.get_mut(&key) {
                            held.last_seen = now;
                        }
                    }
                    KeyEventKind::Release => {
                        self.held.remove(&key);
                    }
                }
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                self.pointer = geometry.and_then(|geometry| geometry.cell_at(*column, *row));
                debug!(column, row, cell = ?self.pointer, "Pointer press");
            }
            _ => {}
        }
    }

    fn press(&mut self, key: Key, now: Instant) {
        match self.held.get_mut(&key) {
            // Autorepeat without release reporting arrives as repeated presses.
            Some(held) => held.last_seen = now,
            None => {
                trace!(?key, "Key down");
                self.held.insert(
                    key,
                    HeldKey {
                        ticks: 1,
                        last_seen: now,
                    },
                );
                self.just_pressed.insert(key);
            }
        }
    }

    /// Closes the tick: clears one-shot input and ages held keys.
    pub fn end_tick(&mut self, now: Instant) {
        self.just_pressed.clear();
        self.pointer = None;
        if !self.reports_release {
            self.held
                .retain(|_, held| now.saturating_duration_since(held.last_seen) < RELEASE_TIMEOUT);
        }
        for held in self.held.values_mut() {
            held.ticks = held.ticks.saturating_add(1);
        }
    }
}

impl InputSource for InputTracker {
    fn is_just_pressed(&self, key: Key) -> bool {
        self.just_pressed.contains(&key)
    }

    fn press_duration(&self, key: Key) -> u32 {
        self.held.get(&key).map_or(0, |held| held.ticks)
    }

    fn pointer_cell(&self) -> Option<Coord> {
        self.pointer
    }
}

/// Maps a crossterm key to a session key.
///
/// Letters are folded to lower case. Digits typed on the numeric keypad
/// become [`Key::Keypad`] only when the terminal reports keypad state.
/// Without keyboard enhancement a keypad digit is indistinguishable from a
/// top-row digit, so it is reported as [`Key::Char`]: 1 to 3 then land on
/// the top row of the letter block and 4 to 9 place nothing.
pub fn translate_key(event: &KeyEvent) -> Option<Key> {
    match event.code {
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Char(c) if event.state.contains(KeyEventState::KEYPAD) && c.is_ascii_digit() => {
            c.to_digit(10).map(|digit| Key::Keypad(digit as u8))
        }
        KeyCode::Char(c) => Some(Key::Char(c.to_ascii_lowercase())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind))
    }

    #[test]
    fn test_translate_folds_case_and_keypad() {
        let shifted = KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT);
        assert_eq!(translate_key(&shifted), Some(Key::Char('r')));

        let keypad = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('7'),
            KeyModifiers::NONE,
            KeyEventKind::Press,
            KeyEventState::KEYPAD,
        );
        assert_eq!(translate_key(&keypad), Some(Key::Keypad(7)));

        let unreported = KeyEvent::new(KeyCode::Char('7'), KeyModifiers::NONE);
        assert_eq!(translate_key(&unreported), Some(Key::Char('7')));

        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(translate_key(&tab), None);
    }

    #[test]
    fn test_press_is_one_shot_but_hold_accumulates() {
        let mut input = InputTracker::new(true);
        let now = Instant::now();
        input.handle_event(&key(KeyCode::Char('r'), KeyEventKind::Press), now, None);
        assert!(input.is_just_pressed(Key::Char('r')));
        assert_eq!(input.press_duration(Key::Char('r')), 1);

        for _ in 0..59 {
            input.end_tick(now);
        }
        assert!(!input.is_just_pressed(Key::Char('r')));
        assert_eq!(input.press_duration(Key::Char('r')), 60);

        input.handle_event(&key(KeyCode::Char('r'), KeyEventKind::Release), now, None);
        assert_eq!(input.press_duration(Key::Char('r')), 0);
    }

    #[test]
    fn test_silent_key_expires_without_release_events() {
        let mut input = InputTracker::new(false);
        let start = Instant::now();
        input.handle_event(&key(KeyCode::Esc, KeyEventKind::Press), start, None);

        input.handle_event(
            &key(KeyCode::Esc, KeyEventKind::Press),
            start + Duration::from_millis(500),
            None,
        );
        input.end_tick(start + Duration::from_millis(900));
        assert_eq!(input.press_duration(Key::Escape), 2);
        assert!(!input.is_just_pressed(Key::Escape));

        input.end_tick(start + Duration::from_millis(1100));
        assert_eq!(input.press_duration(Key::Escape), 0);
    }

    #[test]
    fn test_pointer_resolves_through_geometry() {
        let geometry = BoardGeometry::new(Rect::new(10, 5, 23, 11));
        let mut input = InputTracker::new(true);
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 14,
            modifiers: KeyModifiers::NONE,
        });
        input.handle_event(&click, Instant::now(), Some(&geometry));
        assert_eq!(input.pointer_cell(), Some(Coord::new(0, 2)));

        input.end_tick(Instant::now());
        assert_eq!(input.pointer_cell(), None);
    }
}
