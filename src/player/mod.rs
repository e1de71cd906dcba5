//! Player trait and implementations
//!
//! A player picks where to shoot; the board it shoots at decides whether the
//! shot counts. Two implementations ship with the crate:
//! - AiPlayer: fires at uniformly random cells
//! - CliPlayer: reads coordinates typed on a terminal

use rand::rngs::SmallRng;

use crate::common::{BoardError, ShotResult};
use crate::coord::Coord;

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next cell to fire at. Errors end the game.
    fn choose_target(&mut self, rng: &mut SmallRng) -> anyhow::Result<Coord>;

    /// The last target was refused and another one will be requested.
    fn report_rejected(&mut self, _coord: Coord, _err: &BoardError) {}

    /// Inform the player of the result of its last accepted shot.
    fn report_result(&mut self, _coord: Coord, _result: ShotResult) {}
}

pub mod ai;
pub use ai::AiPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::{parse_coord, CliPlayer, ParseCoordError};
