/// Side length of the square board.
pub const BOARD_SIZE: usize = 6;

/// Ship lengths every side places before play begins.
pub const FLEET: [usize; NUM_SHIPS] = [3, 2, 2, 1, 1, 1, 1];
pub const NUM_SHIPS: usize = 7;

/// Total hitpoints across the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Placement attempts allowed for a whole fleet before the board is thrown
/// away and generation starts over.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;
