//! Grid coordinates and their text encoding.
//!
//! A coordinate is a 1-indexed `(x, y)` pair; `x` is the column, written as a
//! letter, and `y` the row, written as a number. `"C4"` is `(3, 4)`.

use core::fmt;
use core::str::FromStr;

use crate::common::BoardError;
use crate::config::BOARD_SIZE;

/// A cell on the board, always within `1..=BOARD_SIZE` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Coordinate {
    x: u8,
    y: u8,
}

impl Coordinate {
    /// Build a coordinate, rejecting anything off the grid.
    pub fn new(x: i32, y: i32) -> Result<Self, BoardError> {
        let size = BOARD_SIZE as i32;
        if (1..=size).contains(&x) && (1..=size).contains(&y) {
            Ok(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            Err(BoardError::CoordinateOutOfRange { x, y })
        }
    }

    /// Coordinate of the bitboard cell at (`row`, `col`), both 0-indexed.
    pub fn from_index(row: usize, col: usize) -> Result<Self, BoardError> {
        Self::new(col as i32 + 1, row as i32 + 1)
    }

    pub fn x(self) -> u8 {
        self.x
    }

    pub fn y(self) -> u8 {
        self.y
    }

    /// 0-indexed (row, col) of this cell in a bitboard.
    pub fn index(self) -> (usize, usize) {
        (self.y as usize - 1, self.x as usize - 1)
    }

    /// The cell shifted by (`dx`, `dy`), if it is still on the grid.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Self::new(self.x as i32 + dx, self.y as i32 + dy).ok()
    }

    /// Right, left, down, up neighbours. Off-grid neighbours are `None`.
    pub fn orthogonal_neighbors(self) -> [Option<Self>; 4] {
        [
            self.offset(1, 0),
            self.offset(-1, 0),
            self.offset(0, 1),
            self.offset(0, -1),
        ]
    }

    pub fn diagonal_neighbors(self) -> [Option<Self>; 4] {
        [
            self.offset(1, 1),
            self.offset(1, -1),
            self.offset(-1, 1),
            self.offset(-1, -1),
        ]
    }

    /// Every coordinate of the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (1..=BOARD_SIZE).flat_map(|y| (1..=BOARD_SIZE).map(move |x| Coordinate { x, y }))
    }
}

/// Deserialization goes through [`Coordinate::new`] so off-grid pairs are
/// rejected with [`BoardError::CoordinateOutOfRange`].
#[cfg(feature = "std")]
impl<'de> serde::Deserialize<'de> for Coordinate {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            x: i32,
            y: i32,
        }

        let Raw { x, y } = Raw::deserialize(deserializer)?;
        Coordinate::new(x, y).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.x - 1) as char, self.y)
    }
}

impl FromStr for Coordinate {
    type Err = BoardError;

    /// Parse `[A-J]` followed by `1`..=`10`. Case, whitespace and leading
    /// zeros are all rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let (&letter, digits) = bytes
            .split_first()
            .ok_or(BoardError::InvalidCoordinateFormat)?;
        if !(b'A'..b'A' + BOARD_SIZE).contains(&letter) {
            return Err(BoardError::InvalidCoordinateFormat);
        }
        if digits.is_empty()
            || digits.len() > 2
            || digits[0] == b'0'
            || !digits.iter().all(u8::is_ascii_digit)
        {
            return Err(BoardError::InvalidCoordinateFormat);
        }
        let row = digits
            .iter()
            .fold(0i32, |acc, d| acc * 10 + i32::from(d - b'0'));
        let col = i32::from(letter - b'A') + 1;
        Self::new(col, row).map_err(|_| BoardError::InvalidCoordinateFormat)
    }
}
