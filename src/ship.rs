//! Ship geometry and damage tracking using our `BitBoard`.

use core::fmt;

use crate::common::BoardError;
use crate::config::{BB, BOARD_SIZE};
use crate::coord::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A straight ship spanning `start..=end`, with damage tracked in a `BitBoard`.
///
/// The geometry is fixed at construction; only the damage set changes, and it
/// only ever grows.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    start: Coordinate,
    end: Coordinate,
    mask: BB,
    hits: BB,
}

impl Ship {
    /// Build a ship from two corners given in any order.
    ///
    /// Fails with [`BoardError::InvalidOrientation`] when the corners share
    /// neither a column nor a row.
    pub fn new(a: Coordinate, b: Coordinate) -> Result<Self, BoardError> {
        if a.x() != b.x() && a.y() != b.y() {
            return Err(BoardError::InvalidOrientation { a, b });
        }
        let start = Coordinate::new(a.x().min(b.x()).into(), a.y().min(b.y()).into())?;
        let end = Coordinate::new(a.x().max(b.x()).into(), a.y().max(b.y()).into())?;

        // Build occupancy mask
        let mut mask = BB::new();
        for y in start.y()..=end.y() {
            for x in start.x()..=end.x() {
                let (r, c) = Coordinate::new(x.into(), y.into())?.index();
                mask.set(r, c)?;
            }
        }

        Ok(Ship {
            start,
            end,
            mask,
            hits: BB::new(),
        })
    }

    /// Top-left end of the ship.
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// Bottom-right end of the ship.
    pub fn end(&self) -> Coordinate {
        self.end
    }

    /// A single-cell ship shares its column with itself and reports `Vertical`.
    pub fn orientation(&self) -> Orientation {
        if self.start.x() == self.end.x() {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }

    pub fn length(&self) -> usize {
        usize::from(self.end.x() - self.start.x()) + usize::from(self.end.y() - self.start.y()) + 1
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> BB {
        self.mask
    }

    /// Cells of the ship that have been hit.
    pub fn damage(&self) -> BB {
        self.hits
    }

    /// Occupied cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.mask
            .iter_set_bits()
            .filter_map(|(r, c)| Coordinate::from_index(r, c).ok())
    }

    pub fn is_on(&self, coord: Coordinate) -> bool {
        let (r, c) = coord.index();
        self.mask.contains(r, c)
    }

    /// Record a hit at `coord`. Returns `true` if the ship occupies that cell;
    /// cells off the ship are ignored and re-hitting a cell changes nothing.
    pub fn apply_damage(&mut self, coord: Coordinate) -> bool {
        let (r, c) = coord.index();
        if self.mask.contains(r, c) {
            let _ = self.hits.set(r, c);
            true
        } else {
            false
        }
    }

    pub fn is_damaged_at(&self, coord: Coordinate) -> bool {
        let (r, c) = coord.index();
        self.hits.contains(r, c)
    }

    pub fn damage_count(&self) -> usize {
        self.hits.count_ones()
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn has_sunk(&self) -> bool {
        self.hits.count_ones() == self.length()
    }

    /// `true` when `coord` lies in the ship's bounding box grown by one cell
    /// in every direction, diagonals included.
    pub fn is_near(&self, coord: Coordinate) -> bool {
        let near = |v: u8, lo: u8, hi: u8| lo.saturating_sub(1) <= v && v <= hi + 1;
        near(coord.x(), self.start.x(), self.end.x()) && near(coord.y(), self.start.y(), self.end.y())
    }

    /// `true` when any cell of `other` is near this ship.
    pub fn is_near_ship(&self, other: &Ship) -> bool {
        other.cells().any(|cell| self.is_near(cell))
    }

    /// Every on-grid cell for which [`is_near`](Self::is_near) holds.
    pub fn zone(&self) -> BB {
        let mut zone = BB::new();
        let lo = |v: u8| v.saturating_sub(1).max(1);
        let hi = |v: u8| (v + 1).min(BOARD_SIZE);
        for y in lo(self.start.y())..=hi(self.end.y()) {
            for x in lo(self.start.x())..=hi(self.end.x()) {
                if let Ok(coord) = Coordinate::new(x.into(), y.into()) {
                    let (r, c) = coord.index();
                    let _ = zone.set(r, c);
                }
            }
        }
        zone
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ start: {}, end: {}, length: {}, orientation: {:?}, hits: {} }}",
            self.start,
            self.end,
            self.length(),
            self.orientation(),
            self.hits.count_ones(),
        )
    }
}
