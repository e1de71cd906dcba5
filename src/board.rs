//! Game board state: grid, fleet, and shot resolution.

use alloc::vec::Vec;
use core::fmt;
use log::{debug, trace};

use crate::bitboard::BitBoard;
use crate::common::{BoardError, ShotResult};
use crate::config::BOARD_SIZE;
use crate::coord::Coord;
use crate::ship::Ship;

/// Cell set sized for the game board.
pub type CellSet = BitBoard<u64, BOARD_SIZE>;

/// What a single grid cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Water,
    /// Intact ship segment.
    Ship,
    Hit,
    Miss,
    /// Around a sunk ship; known to be empty.
    Contour,
}

impl Cell {
    /// Glyph used by the text renderer. Hidden boards show ships as water.
    pub fn glyph(self, hidden: bool) -> char {
        match self {
            Cell::Water => 'O',
            Cell::Ship if hidden => 'O',
            Cell::Ship => '■',
            Cell::Hit => 'X',
            Cell::Miss => 'T',
            Cell::Contour => '.',
        }
    }
}

/// One side's waters.
///
/// Placement and play track forbidden cells separately: `reserved` holds ship
/// cells plus the one-cell buffer around them and only matters while ships
/// are being placed, `targeted` holds every cell a shot may no longer land on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    ships: Vec<Ship>,
    reserved: CellSet,
    targeted: CellSet,
    sunk: usize,
    hidden: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty, visible board.
    pub fn new() -> Self {
        Board {
            grid: [[Cell::Water; BOARD_SIZE]; BOARD_SIZE],
            ships: Vec::new(),
            reserved: CellSet::new(),
            targeted: CellSet::new(),
            sunk: 0,
            hidden: false,
        }
    }

    /// Create an empty board whose ships render as water.
    pub fn hidden() -> Self {
        Board {
            hidden: true,
            ..Self::new()
        }
    }

    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// Ship cells and their buffers, as recorded during placement.
    pub fn reserved(&self) -> CellSet {
        self.reserved
    }

    /// Cells no further shot may land on.
    pub fn targeted(&self) -> CellSet {
        self.targeted
    }

    /// State of the cell at `coord`, `None` off the board.
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        if self.is_out_of_bounds(coord) {
            None
        } else {
            Some(self.grid[coord.row as usize][coord.col as usize])
        }
    }

    pub fn is_out_of_bounds(&self, coord: Coord) -> bool {
        let n = BOARD_SIZE as i32;
        !((0..n).contains(&coord.row) && (0..n).contains(&coord.col))
    }

    /// Place `ship`, then reserve every in-bounds cell touching it so that no
    /// later ship can be placed adjacent to it, diagonals included.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        for cell in ship.cells() {
            if self.is_out_of_bounds(cell) || self.reserved.contains(cell)? {
                return Err(BoardError::InvalidPlacement);
            }
        }
        for cell in ship.cells() {
            self.set_cell(cell, Cell::Ship);
            self.reserved.insert(cell)?;
        }
        for cell in ship.cells().flat_map(Coord::neighbourhood) {
            if !self.is_out_of_bounds(cell) {
                self.reserved.insert(cell)?;
            }
        }
        trace!(
            "placed {}-ship at {:?} {:?}",
            ship.length(),
            ship.bow(),
            ship.orientation()
        );
        self.ships.push(ship);
        Ok(())
    }

    /// Resolve a shot at `coord`. Rejected shots leave the board untouched.
    pub fn apply_shot(&mut self, coord: Coord) -> Result<ShotResult, BoardError> {
        if self.is_out_of_bounds(coord) {
            return Err(BoardError::OutOfBounds(coord));
        }
        if self.targeted.contains(coord)? {
            return Err(BoardError::AlreadyTargeted(coord));
        }
        self.targeted.insert(coord)?;

        let Some(idx) = self.ships.iter().position(|ship| ship.is_hit_by(coord)) else {
            self.set_cell(coord, Cell::Miss);
            return Ok(ShotResult::Miss);
        };

        self.set_cell(coord, Cell::Hit);
        if !self.ships[idx].hit() {
            return Ok(ShotResult::Hit);
        }
        self.sunk += 1;
        let ship = self.ships[idx];
        self.reveal_contour(&ship)?;
        debug!(
            "{}-ship at {:?} sunk, {}/{} down",
            ship.length(),
            ship.bow(),
            self.sunk,
            self.ships.len()
        );
        Ok(ShotResult::Sunk)
    }

    /// All ships sunk.
    pub fn is_defeated(&self) -> bool {
        self.sunk == self.ships.len()
    }

    /// Mark the surroundings of a sunk ship as known-empty and stop them from
    /// being targeted again. Cells already shot at keep their marker.
    fn reveal_contour(&mut self, ship: &Ship) -> Result<(), BoardError> {
        for cell in ship.cells().flat_map(Coord::neighbourhood) {
            if self.is_out_of_bounds(cell) {
                continue;
            }
            if self.targeted.insert(cell)? {
                self.set_cell(cell, Cell::Contour);
            }
        }
        Ok(())
    }

    fn set_cell(&mut self, coord: Coord, cell: Cell) {
        self.grid[coord.row as usize][coord.col as usize] = cell;
    }
}

/// Renders the grid with one-based row and column labels.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  |")?;
        for c in 0..BOARD_SIZE {
            write!(f, " {} |", c + 1)?;
        }
        for (r, row) in self.grid.iter().enumerate() {
            write!(f, "\n{} |", r + 1)?;
            for cell in row {
                write!(f, " {} |", cell.glyph(self.hidden))?;
            }
        }
        Ok(())
    }
}
