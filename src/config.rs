use crate::bitboard::BitBoard;

/// Side length of the square grid. Coordinates run `1..=BOARD_SIZE` on both axes.
pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;

/// Required fleet: one ship of each length, placed largest-first by the generator.
pub const FLEET_LENGTHS: [usize; NUM_SHIPS] = [5, 4, 3, 2, 1];

/// Total number of ship segments in a valid fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 2 + 1;

/// Random start/direction draws allowed per ship before fleet generation gives up.
pub const GENERATION_ATTEMPT_LIMIT: usize = 10_000;

/// Rejection-sampling draws allowed per targeting decision.
pub const TARGETING_ATTEMPT_LIMIT: usize = 10_000;

/// Turns a game may last before the engine stops it. Two full boards, which
/// the computer players never exceed since they do not repeat shots. A human
/// who repeats shots can run into it.
pub const DEFAULT_MAX_TURNS: usize = 2 * (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Cell set covering the whole grid.
pub type BB = BitBoard<u128, { BOARD_SIZE as usize }>;
