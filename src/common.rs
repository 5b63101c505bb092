//! Common types for the engine: errors and attack outcomes.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::coord::Coordinate;

/// Outcome of one attack, as reported back to the attacker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessResult {
    /// Attack missed all ships.
    Miss,
    /// Attack hit a ship that is still afloat.
    Hit,
    /// Attack hit the last intact cell of a ship.
    Sink,
}

impl GuessResult {
    /// Classify an attack from the `(hit, sunk)` pair.
    pub fn from_flags(hit: bool, sunk: bool) -> Self {
        match (hit, sunk) {
            (true, true) => GuessResult::Sink,
            (true, false) => GuessResult::Hit,
            (false, _) => GuessResult::Miss,
        }
    }

    pub fn is_hit(self) -> bool {
        !matches!(self, GuessResult::Miss)
    }

    pub fn is_sunk(self) -> bool {
        matches!(self, GuessResult::Sink)
    }

    /// The `(hit, sunk)` pair.
    pub fn flags(self) -> (bool, bool) {
        (self.is_hit(), self.is_sunk())
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessResult::Miss => write!(f, "miss"),
            GuessResult::Hit => write!(f, "hit"),
            GuessResult::Sink => write!(f, "sunk"),
        }
    }
}

/// Errors returned by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., invalid size or index).
    BitBoardError(BitBoardError),
    /// Ship corners differ on both axes.
    InvalidOrientation { a: Coordinate, b: Coordinate },
    /// Fleet is not exactly one ship of each length 1..=5.
    FleetComposition,
    /// Two ships (by fleet index) touch or overlap.
    ShipProximity { first: usize, second: usize },
    /// Coordinate outside `1..=BOARD_SIZE` on some axis.
    CoordinateOutOfRange { x: i32, y: i32 },
    /// Text does not match `[A-J](1-10)`.
    InvalidCoordinateFormat,
    /// Automatic placement exceeded its retry bound for a ship of this length.
    GenerationFailed { length: usize },
    /// A targeting strategy has no coordinate left to choose.
    NoTargetAvailable,
    /// A keyboard player's input ended or could not be read.
    InputClosed,
    /// A turn was requested after one fleet was already sunk.
    GameOver,
    /// The game did not finish within the configured number of turns.
    TurnLimitReached { turns: usize },
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::InvalidOrientation { a, b } => {
                write!(f, "Ship from {} to {} is neither horizontal nor vertical", a, b)
            }
            BoardError::FleetComposition => {
                write!(f, "There should be 5 ships in total, one of each length 1 to 5")
            }
            BoardError::ShipProximity { first, second } => {
                write!(f, "Ships {} and {} are too close to each other", first, second)
            }
            BoardError::CoordinateOutOfRange { x, y } => {
                write!(f, "Coordinate ({}, {}) is outside the board", x, y)
            }
            BoardError::InvalidCoordinateFormat => {
                write!(f, "Coordinates must be a letter A-J followed by a number 1-10 (e.g. C4)")
            }
            BoardError::GenerationFailed { length } => {
                write!(f, "Unable to place ship of length {}", length)
            }
            BoardError::NoTargetAvailable => write!(f, "No target left to attack"),
            BoardError::InputClosed => write!(f, "Input closed before a target was chosen"),
            BoardError::GameOver => write!(f, "The game is already over"),
            BoardError::TurnLimitReached { turns } => {
                write!(f, "Game did not finish within {} turns", turns)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
