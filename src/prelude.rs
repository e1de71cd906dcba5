//! Commonly used types and utilities for ease of import.

pub use crate::{
    random_board, AiPlayer, Board, Coord, FleetGenerator, Game, GameConfig, GameStatus, Player,
    Seat, ShotResult, Side,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer};
