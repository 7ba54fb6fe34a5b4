//! Core domain types for the 3x3 board.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the two markers a player places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// Player A, drawn as a ring.
    O,
    /// Player B, drawn as a cross.
    X,
}

impl Symbol {
    /// Returns the opposing symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::O => Symbol::X,
            Symbol::X => Symbol::O,
        }
    }

    /// Stable index used for per-symbol tables (`O` = 0, `X` = 1).
    pub fn index(self) -> usize {
        match self {
            Symbol::O => 0,
            Symbol::X => 1,
        }
    }

    /// Single-letter label.
    pub fn label(self) -> &'static str {
        match self {
            Symbol::O => "O",
            Symbol::X => "X",
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing placed here.
    Empty,
    /// Cell holds a symbol.
    Occupied(Symbol),
}

/// A board coordinate.
///
/// `x` is the horizontal index and `y` the vertical one, both in `0..3` when
/// used against a [`Board`]. The type itself does not validate its range:
/// indexing a board with an out-of-range coordinate panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Horizontal index.
    pub x: usize,
    /// Vertical index.
    pub y: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A completed line of three equal symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_new::new)]
pub struct WinningLine {
    /// The symbol that completed the line.
    pub symbol: Symbol,
    /// The three cells of the line, in scan order.
    pub cells: [Coord; 3],
}

/// 3x3 board, indexed `[x][y]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Side length of the board.
    pub const SIZE: usize = 3;

    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Returns the cell at `at`.
    ///
    /// # Panics
    ///
    /// Panics if `at` is outside the board.
    pub fn get(&self, at: Coord) -> Cell {
        self.cells[at.x][at.y]
    }

    /// True if the cell at `at` holds nothing.
    ///
    /// # Panics
    ///
    /// Panics if `at` is outside the board.
    pub fn is_empty(&self, at: Coord) -> bool {
        self.get(at) == Cell::Empty
    }

    /// Writes `symbol` into the cell at `at`.
    ///
    /// Legality is the caller's job: the cell is overwritten whatever it
    /// held before.
    ///
    /// # Panics
    ///
    /// Panics if `at` is outside the board.
    pub fn place(&mut self, at: Coord, symbol: Symbol) {
        self.cells[at.x][at.y] = Cell::Occupied(symbol);
    }

    /// Clears the cell at `at`.
    ///
    /// # Panics
    ///
    /// Panics if `at` is outside the board.
    pub fn remove(&mut self, at: Coord) {
        self.cells[at.x][at.y] = Cell::Empty;
    }

    /// Resets every cell to empty.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; 3]; 3];
    }

    /// Iterates all coordinates, `x` outer and `y` inner.
    pub fn coords() -> impl Iterator<Item = Coord> {
        (0..Self::SIZE).flat_map(|x| (0..Self::SIZE).map(move |y| Coord::new(x, y)))
    }

    /// Iterates the empty coordinates in [`Board::coords`] order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Self::coords().filter(|&at| self.is_empty(at))
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        Self::coords().filter(|&at| !self.is_empty(at)).count()
    }

    /// Returns the first completed line, if any.
    ///
    /// See [`super::rules::check_winner`] for the scan order.
    pub fn check_winner(&self) -> Option<WinningLine> {
        super::rules::check_winner(self)
    }

    /// True if no cell is empty.
    pub fn is_full(&self) -> bool {
        super::rules::is_full(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Draws the board with `y` as the row and `x` as the column.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..Self::SIZE {
            for x in 0..Self::SIZE {
                let mark = match self.cells[x][y] {
                    Cell::Empty => ".",
                    Cell::Occupied(symbol) => symbol.label(),
                };
                f.write_str(mark)?;
                if x < Self::SIZE - 1 {
                    f.write_str("|")?;
                }
            }
            if y < Self::SIZE - 1 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
