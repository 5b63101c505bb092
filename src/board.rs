//! Fleet state for one player: ship placement, attack resolution, shot history.

use alloc::vec::Vec;
use core::fmt;

use log::{debug, trace};
use rand::Rng;

use crate::common::{BoardError, GuessResult};
use crate::config::{BB, BOARD_SIZE, FLEET_LENGTHS, NUM_SHIPS};
use crate::coord::Coordinate;
use crate::fleet;
use crate::ship::Ship;

const GRID: usize = BOARD_SIZE as usize;

/// What a renderer shows at one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Not attacked, and either water or a hidden ship.
    #[default]
    Empty,
    /// Attacked, nothing afloat was hit here.
    Miss,
    /// Intact ship segment (only in the revealing view).
    Ship,
    /// Hit segment of a ship still afloat.
    Damaged,
    /// Segment of a sunk ship.
    Sunk,
}

/// Rows of cells, indexed `[y - 1][x - 1]`.
pub type Grid = [[Cell; GRID]; GRID];

/// Main board state: the validated fleet and every shot fired at it.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    ships: Vec<Ship>,
    shots: BB,
    shot_log: Vec<Coordinate>,
}

impl Board {
    /// Validate a fleet and build a board for it.
    ///
    /// The fleet must hold exactly one ship of each length in
    /// [`FLEET_LENGTHS`], and no ship may be near another.
    pub fn new(ships: Vec<Ship>) -> Result<Self, BoardError> {
        let mut lengths: Vec<usize> = ships.iter().map(Ship::length).collect();
        lengths.sort_unstable();
        let mut expected = FLEET_LENGTHS;
        expected.sort_unstable();
        if lengths.len() != NUM_SHIPS || lengths[..] != expected[..] {
            return Err(BoardError::FleetComposition);
        }

        for (i, ship) in ships.iter().enumerate() {
            for (j, other) in ships.iter().enumerate().skip(i + 1) {
                if ship.is_near_ship(other) {
                    return Err(BoardError::ShipProximity {
                        first: i,
                        second: j,
                    });
                }
            }
        }

        Ok(Board {
            ships,
            shots: BB::new(),
            shot_log: Vec::new(),
        })
    }

    /// Board with a randomly generated fleet.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, BoardError> {
        let ships = fleet::generate_ships(rng)?;
        debug!("generated fleet: {:?}", ships);
        Self::new(ships)
    }

    /// Fire at `coord`.
    ///
    /// The shot is always recorded, including repeats. At most one ship can
    /// occupy the cell; if one does it takes the damage.
    pub fn attack(&mut self, coord: Coordinate) -> GuessResult {
        let (r, c) = coord.index();
        let _ = self.shots.set(r, c);
        self.shot_log.push(coord);

        let result = match self.ships.iter_mut().find(|ship| ship.is_on(coord)) {
            Some(ship) => {
                ship.apply_damage(coord);
                GuessResult::from_flags(true, ship.has_sunk())
            }
            None => GuessResult::Miss,
        };
        trace!("attack at {} -> {}", coord, result);
        result
    }

    /// Returns `true` when all ships are sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::has_sunk)
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships still afloat.
    pub fn remaining_ships(&self) -> usize {
        self.ships.iter().filter(|ship| !ship.has_sunk()).count()
    }

    /// The ship occupying `coord`, if any.
    pub fn ship_at(&self, coord: Coordinate) -> Option<&Ship> {
        self.ships.iter().find(|ship| ship.is_on(coord))
    }

    /// Set of attacked cells.
    pub fn previous_shots(&self) -> BB {
        self.shots
    }

    pub fn was_attacked(&self, coord: Coordinate) -> bool {
        let (r, c) = coord.index();
        self.shots.contains(r, c)
    }

    /// Every attack in the order it was made, repeats included.
    pub fn shot_history(&self) -> &[Coordinate] {
        &self.shot_log
    }

    /// Owner's view: intact ship segments are visible.
    pub fn visible_grid_with_ships(&self) -> Grid {
        self.project(true)
    }

    /// Opponent's view: only damage and misses are visible.
    pub fn visible_grid_fog_of_war(&self) -> Grid {
        self.project(false)
    }

    fn project(&self, reveal: bool) -> Grid {
        let mut grid = [[Cell::Empty; GRID]; GRID];
        for (r, c) in self.shots.iter_set_bits() {
            grid[r][c] = Cell::Miss;
        }
        for ship in &self.ships {
            if ship.has_sunk() {
                for (r, c) in ship.mask().iter_set_bits() {
                    grid[r][c] = Cell::Sunk;
                }
                continue;
            }
            if reveal {
                for (r, c) in ship.mask().iter_set_bits() {
                    grid[r][c] = Cell::Ship;
                }
            }
            for (r, c) in ship.damage().iter_set_bits() {
                grid[r][c] = Cell::Damaged;
            }
        }
        grid
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ships: {:?},\n  shots: {:?},\n  history: {}\n}}",
            self.ships,
            self.shots,
            self.shot_log.len()
        )
    }
}
