//! Per-symbol rolling window of live placements.

use crate::board::Coord;

/// What the caller must do after a placement is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowUpdate {
    /// Cell to clear from the board now.
    pub remove: Option<Coord>,
    /// Cell that will be cleared on the symbol's next placement.
    pub highlight: Option<Coord>,
}

impl WindowUpdate {
    /// True if a cell must be cleared.
    pub fn should_remove(&self) -> bool {
        self.remove.is_some()
    }

    /// True if a cell should be flagged as next to go.
    pub fn should_highlight(&self) -> bool {
        self.highlight.is_some()
    }
}

/// The last two placements of one symbol plus the one queued for removal.
///
/// Removal is deferred one full cycle: the placement pushed out of the
/// window by the third move is only cleared from the board on the fourth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveWindow {
    live: [Option<Coord>; 2],
    pending_removal: Option<Coord>,
}

impl MoveWindow {
    /// Creates an empty window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of placements held in the window (0 to 2).
    pub fn len(&self) -> usize {
        self.live.iter().flatten().count()
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Live placements, oldest first.
    pub fn live(&self) -> impl Iterator<Item = Coord> + '_ {
        self.live.iter().flatten().copied()
    }

    /// Placement queued for removal on the next record.
    pub fn pending_removal(&self) -> Option<Coord> {
        self.pending_removal
    }

    /// Records a placement at `at`.
    ///
    /// The removal reported is whatever was pending before this call. When
    /// the window was already full its oldest entry becomes the new pending
    /// removal.
    pub fn record(&mut self, at: Coord) -> WindowUpdate {
        let remove = self.pending_removal;

        match self.live {
            [Some(oldest), Some(newest)] => {
                self.pending_removal = Some(oldest);
                self.live = [Some(newest), Some(at)];
            }
            [None, _] => self.live[0] = Some(at),
            [Some(_), None] => self.live[1] = Some(at),
        }

        let highlight = if self.len() == 2 {
            self.pending_removal
        } else {
            None
        };

        WindowUpdate { remove, highlight }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_fills_then_rotates() {
        let mut window = MoveWindow::new();
        assert!(window.is_empty());

        window.record(Coord::new(0, 0));
        window.record(Coord::new(1, 1));
        assert_eq!(window.len(), 2);
        assert_eq!(window.pending_removal(), None);

        window.record(Coord::new(2, 2));
        assert_eq!(
            window.live().collect::<Vec<_>>(),
            vec![Coord::new(1, 1), Coord::new(2, 2)]
        );
        assert_eq!(window.pending_removal(), Some(Coord::new(0, 0)));
    }

    #[test]
    fn test_second_placement_does_not_highlight() {
        let mut window = MoveWindow::new();
        window.record(Coord::new(0, 0));
        let update = window.record(Coord::new(1, 0));
        assert!(!update.should_remove());
        assert!(!update.should_highlight());
    }
}
