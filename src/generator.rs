//! Random fleet placement.

use alloc::vec::Vec;
use log::{debug, trace};
use rand::Rng;

use crate::board::Board;
use crate::config::{BOARD_SIZE, FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::coord::Coord;
use crate::ship::{Orientation, Ship};

/// Places a fleet at random, honouring the no-touching rule enforced by
/// [`Board::place_ship`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetGenerator {
    fleet: Vec<usize>,
    max_attempts: usize,
}

impl Default for FleetGenerator {
    /// The standard fleet with the standard attempt budget.
    fn default() -> Self {
        Self::new(FLEET, MAX_PLACEMENT_ATTEMPTS)
    }
}

impl FleetGenerator {
    /// `max_attempts` is shared by the whole fleet, not per ship.
    pub fn new(fleet: impl Into<Vec<usize>>, max_attempts: usize) -> Self {
        Self {
            fleet: fleet.into(),
            max_attempts,
        }
    }

    pub fn fleet(&self) -> &[usize] {
        &self.fleet
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Try to place the whole fleet on an empty board.
    ///
    /// Returns `None` once the attempt budget runs out; the partial board is
    /// dropped and the caller should start over.
    pub fn try_board<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Board> {
        let mut board = Board::new();
        let mut attempts = 0;
        for &length in &self.fleet {
            loop {
                attempts += 1;
                if attempts > self.max_attempts {
                    debug!(
                        "gave up after {} attempts with {}/{} ships placed",
                        self.max_attempts,
                        board.ships().len(),
                        self.fleet.len()
                    );
                    return None;
                }
                // The bow range runs one past the last row and column; such
                // ships are rejected by the board like any other misfit.
                let bow = Coord::new(
                    rng.random_range(0..=BOARD_SIZE as i32),
                    rng.random_range(0..=BOARD_SIZE as i32),
                );
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                match board.place_ship(Ship::new(bow, length, orientation)) {
                    Ok(()) => break,
                    Err(err) => trace!("{length}-ship at {bow:?} {orientation:?}: {err}"),
                }
            }
        }
        Some(board)
    }

    /// Keep generating until a board comes out. The standard fleet fits
    /// easily; a fleet that can never fit makes this loop forever.
    pub fn random_board<R: Rng + ?Sized>(&self, rng: &mut R) -> Board {
        let mut restarts = 0usize;
        loop {
            if let Some(board) = self.try_board(rng) {
                if restarts > 0 {
                    debug!("board generated after {restarts} restarts");
                }
                return board;
            }
            restarts += 1;
        }
    }
}

/// A board holding the standard fleet.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R) -> Board {
    FleetGenerator::default().random_board(rng)
}
