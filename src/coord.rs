//! Cell coordinates.

use core::fmt;

/// Offsets of the 3×3 block centred on a cell, the cell itself included.
const NEIGHBOURHOOD: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A zero-based `(row, col)` cell position.
///
/// Both components are signed: neighbours of edge cells and user input such
/// as `0 0` (which lands on `(-1, -1)`) have to be representable so that the
/// board can reject them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// This coordinate shifted by `(d_row, d_col)`.
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// The cell and its eight neighbours, diagonals included. Cells off the
    /// board are yielded too; filtering is up to the caller.
    pub fn neighbourhood(self) -> impl Iterator<Item = Coord> {
        NEIGHBOURHOOD
            .iter()
            .map(move |&(d_row, d_col)| self.offset(d_row, d_col))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// One-based `row, col`, the way players type coordinates in.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.row + 1, self.col + 1)
    }
}
