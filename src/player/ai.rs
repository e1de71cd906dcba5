use log::debug;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::{BoardError, ShotResult};
use crate::config::BOARD_SIZE;
use crate::coord::Coord;

use super::Player;

/// Computer player that fires at uniformly random cells.
///
/// It keeps no record of earlier shots; repeats are refused by the board and
/// it simply draws again.
#[derive(Debug, Default, Clone, Copy)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn choose_target(&mut self, rng: &mut SmallRng) -> anyhow::Result<Coord> {
        let size = BOARD_SIZE as i32;
        Ok(Coord::new(rng.random_range(0..size), rng.random_range(0..size)))
    }

    fn report_rejected(&mut self, coord: Coord, err: &BoardError) {
        debug!("computer drew {coord:?} again: {err}");
    }

    fn report_result(&mut self, coord: Coord, result: ShotResult) {
        debug!("computer fired at {coord:?}: {result:?}");
    }
}
