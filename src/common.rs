//! Common types for the engine: shot outcomes and board errors.

use thiserror::Error;

use crate::bitboard::BitBoardError;
use crate::coord::Coord;

/// Result of a shot the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot landed on open water.
    Miss,
    /// Shot damaged a ship that is still afloat.
    Hit,
    /// Shot took the last hitpoint of a ship.
    Sunk,
}

impl ShotResult {
    /// `true` for anything that struck a ship.
    pub fn is_hit(self) -> bool {
        !matches!(self, ShotResult::Miss)
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Shot aimed outside the grid.
    #[error("shot at {0} is outside the board")]
    OutOfBounds(Coord),
    /// Shot aimed at a cell that was already shot at or revealed.
    #[error("cell {0} has already been shot at")]
    AlreadyTargeted(Coord),
    /// Ship would leave the board or touch another ship or its buffer.
    #[error("ship does not fit there")]
    InvalidPlacement,
    /// Underlying bitboard error.
    #[error(transparent)]
    BitBoard(#[from] BitBoardError),
}

impl BoardError {
    /// Errors the shooter recovers from by picking another target.
    pub fn is_rejected_shot(&self) -> bool {
        matches!(
            self,
            BoardError::OutOfBounds(_) | BoardError::AlreadyTargeted(_)
        )
    }
}
