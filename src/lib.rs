#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bitboard;
mod board;
mod common;
mod config;
mod coord;
mod game;
mod generator;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod prelude;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use bitboard::{BitBoard, BitBoardError, Cells};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::Coord;
pub use game::*;
pub use generator::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::{AiPlayer, Player};
#[cfg(feature = "std")]
pub use player::{parse_coord, CliPlayer, ParseCoordError};
pub use ship::*;
