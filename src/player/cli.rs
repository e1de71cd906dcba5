#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::string::String;

use anyhow::bail;
use rand::rngs::SmallRng;
use thiserror::Error;

use crate::common::BoardError;
use crate::coord::Coord;

use super::Player;

/// Why a line typed by the player is not a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCoordError {
    #[error("Enter two coordinates: row and column!")]
    WrongCount(usize),
    #[error("Enter numbers!")]
    NotANumber,
}

/// Parse `"row col"`, both one-based, into a zero-based [`Coord`].
///
/// Only the syntax is checked: `"0 9"` parses to `(-1, 8)` and is left for
/// the board to refuse.
pub fn parse_coord(line: &str) -> Result<Coord, ParseCoordError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = parts.as_slice() else {
        return Err(ParseCoordError::WrongCount(parts.len()));
    };
    Ok(Coord::new(parse_axis(row)? - 1, parse_axis(col)? - 1))
}

fn parse_axis(token: &str) -> Result<i32, ParseCoordError> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseCoordError::NotANumber);
    }
    token.parse().map_err(|_| ParseCoordError::NotANumber)
}

/// Human player typing coordinates on a terminal.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the underlying reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn choose_target(&mut self, _rng: &mut SmallRng) -> anyhow::Result<Coord> {
        loop {
            write!(self.output, "Your move: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("input closed while waiting for a move");
            }
            match parse_coord(&line) {
                Ok(coord) => return Ok(coord),
                Err(err) => writeln!(self.output, " {err} ")?,
            }
        }
    }

    fn report_rejected(&mut self, _coord: Coord, err: &BoardError) {
        let _ = writeln!(self.output, "{err}");
    }
}
