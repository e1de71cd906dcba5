#![cfg(feature = "std")]

//! Console output for the interactive binary.

use crate::{Game, ShotResult, Side};

const RULE: &str = "--------------------";

/// Display names for the two seats, indexed First then Second.
pub type Labels = [&'static str; 2];

pub fn label(labels: &Labels, side: Side) -> &'static str {
    match side {
        Side::First => labels[0],
        Side::Second => labels[1],
    }
}

/// Print the greeting and the input format.
pub fn greet() {
    std::println!(" Welcome to Sea Battle ");
    std::println!("   Input format: x y   ");
    std::println!("   x - row number      ");
    std::println!("   y - column number   ");
}

/// Print both boards, each under its owner's name.
pub fn print_boards(game: &Game, labels: &Labels) {
    std::println!("{RULE}");
    std::println!("{}'s board:", labels[0]);
    std::println!("{}", game.board(Side::First));
    std::println!("{RULE}");
    std::println!("{}'s board:", labels[1]);
    std::println!("{}", game.board(Side::Second));
    std::println!("{RULE}");
}

pub fn describe(result: ShotResult) -> &'static str {
    match result {
        ShotResult::Miss => "Miss!",
        ShotResult::Hit => "Ship hit!",
        ShotResult::Sunk => "Ship destroyed!",
    }
}

pub fn announce_winner(labels: &Labels, winner: Side) {
    std::println!("{RULE}");
    std::println!("{} wins!", label(labels, winner));
}
