use alloc::boxed::Box;
use anyhow::bail;
use log::debug;
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{BoardError, ShotResult},
    coord::Coord,
    player::Player,
};

/// One of the two seats at the table. `First` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// Rules that may be varied between games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    /// Let a player who sinks a ship fire again, as after a plain hit.
    ///
    /// Off by default: the classic rule set passes the turn after a sink even
    /// though it keeps it after a hit.
    pub extra_turn_on_sink: bool,
}

impl GameConfig {
    /// Whether a shot with `result` lets the shooter act again.
    pub fn keeps_turn(&self, result: ShotResult) -> bool {
        match result {
            ShotResult::Hit => true,
            ShotResult::Sunk => self.extra_turn_on_sink,
            ShotResult::Miss => false,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Side),
}

/// What happened during a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub side: Side,
    pub target: Coord,
    pub result: ShotResult,
    /// The same side moves next.
    pub extra_turn: bool,
}

/// Accepted shots fired by each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotCounts {
    pub first: usize,
    pub second: usize,
}

/// Summary of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOutcome {
    pub winner: Side,
    pub moves: usize,
    pub shots: ShotCounts,
}

/// A player together with the board it defends.
pub struct Seat {
    player: Box<dyn Player>,
    board: Board,
    shots: usize,
}

impl Seat {
    pub fn new(player: Box<dyn Player>, board: Board) -> Self {
        Self {
            player,
            board,
            shots: 0,
        }
    }
}

/// Ask `player` for targets until `board` accepts one.
///
/// Out-of-bounds and repeated targets are reported back to the player and
/// another target is requested; any other error is returned.
pub fn play_move(
    player: &mut dyn Player,
    board: &mut Board,
    rng: &mut SmallRng,
) -> anyhow::Result<(Coord, ShotResult)> {
    loop {
        let target = player.choose_target(rng)?;
        match board.apply_shot(target) {
            Ok(result) => {
                player.report_result(target, result);
                return Ok((target, result));
            }
            Err(err @ (BoardError::OutOfBounds(_) | BoardError::AlreadyTargeted(_))) => {
                player.report_rejected(target, &err);
            }
            Err(err) => return Err(err.into()),
        }
    }
}

/// Turn controller: alternates the two seats until one fleet is gone.
pub struct Game {
    seats: [Seat; 2],
    config: GameConfig,
    turn: usize,
    moves: usize,
}

impl Game {
    pub fn new(first: Seat, second: Seat, config: GameConfig) -> Self {
        Self {
            seats: [first, second],
            config,
            turn: 0,
            moves: 0,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Board defended by `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.seats[side.index()].board
    }

    /// Accepted shots fired by `side` so far.
    pub fn shots(&self, side: Side) -> usize {
        self.seats[side.index()].shots
    }

    /// Moves played so far, extra turns included.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Side due to act next.
    pub fn to_move(&self) -> Side {
        if self.turn % 2 == 0 {
            Side::First
        } else {
            Side::Second
        }
    }

    pub fn status(&self) -> GameStatus {
        if self.board(Side::Second).is_defeated() {
            GameStatus::Won(Side::First)
        } else if self.board(Side::First).is_defeated() {
            GameStatus::Won(Side::Second)
        } else {
            GameStatus::InProgress
        }
    }

    /// Play a single move for the side whose turn it is.
    pub fn step(&mut self, rng: &mut SmallRng) -> anyhow::Result<Turn> {
        if let GameStatus::Won(winner) = self.status() {
            bail!("game is over, {winner:?} side already won");
        }
        let side = self.to_move();
        let [first, second] = &mut self.seats;
        let (shooter, defender) = match side {
            Side::First => (first, second),
            Side::Second => (second, first),
        };

        let (target, result) = play_move(shooter.player.as_mut(), &mut defender.board, rng)?;
        shooter.shots += 1;
        self.moves += 1;

        let extra_turn = self.config.keeps_turn(result);
        if !extra_turn {
            self.turn += 1;
        }
        debug!("move {}: {side:?} -> {target:?} {result:?}", self.moves);
        Ok(Turn {
            side,
            target,
            result,
            extra_turn,
        })
    }

    /// Step until one side has lost every ship.
    pub fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<GameOutcome> {
        loop {
            if let GameStatus::Won(winner) = self.status() {
                return Ok(self.outcome(winner));
            }
            self.step(rng)?;
        }
    }

    fn outcome(&self, winner: Side) -> GameOutcome {
        GameOutcome {
            winner,
            moves: self.moves,
            shots: ShotCounts {
                first: self.shots(Side::First),
                second: self.shots(Side::Second),
            },
        }
    }
}
