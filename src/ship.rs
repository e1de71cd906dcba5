//! Straight-line ships and the cells they cover.

use crate::coord::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends to the right of the bow, along the row.
    Horizontal,
    /// Extends down from the bow, along the column.
    Vertical,
}

impl Orientation {
    /// `(row, col)` step between consecutive cells.
    const fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A ship anchored at its bow. Cells are derived from bow, length and
/// orientation on demand; only the remaining hitpoints change over a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    bow: Coord,
    length: usize,
    orientation: Orientation,
    hitpoints: usize,
}

impl Ship {
    /// A fresh, undamaged ship. Board bounds are not checked here.
    pub fn new(bow: Coord, length: usize, orientation: Orientation) -> Self {
        Self {
            bow,
            length,
            orientation,
            hitpoints: length,
        }
    }

    /// Cells covered by the ship, starting at the bow.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let (d_row, d_col) = self.orientation.step();
        let bow = self.bow;
        (0..self.length as i32).map(move |i| bow.offset(d_row * i, d_col * i))
    }

    pub fn is_hit_by(&self, coord: Coord) -> bool {
        self.cells().any(|cell| cell == coord)
    }

    /// Take one hitpoint. Returns `true` only for the hit that sinks the ship.
    pub fn hit(&mut self) -> bool {
        if self.hitpoints == 0 {
            return false;
        }
        self.hitpoints -= 1;
        self.hitpoints == 0
    }

    pub fn is_sunk(&self) -> bool {
        self.hitpoints == 0
    }

    pub fn hitpoints(&self) -> usize {
        self.hitpoints
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn bow(&self) -> Coord {
        self.bow
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}
