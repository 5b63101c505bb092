//! Random fleet placement.

use alloc::vec::Vec;

use log::trace;
use rand::Rng;

use crate::common::BoardError;
use crate::config::{BB, FLEET_LENGTHS, GENERATION_ATTEMPT_LIMIT, NUM_SHIPS};
use crate::coord::Coordinate;
use crate::ship::Ship;

/// Unit steps from a ship's first cell towards its last.
const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Generate a fleet satisfying the board rules, largest ship first.
///
/// Each ship starts on a uniformly drawn free cell and extends in one of four
/// uniformly drawn directions. Candidates that leave the grid, cover a taken
/// cell, or sit near an already placed ship are redrawn.
pub fn generate_ships<R: Rng + ?Sized>(rng: &mut R) -> Result<Vec<Ship>, BoardError> {
    let mut free = BB::full();
    let mut ships = Vec::with_capacity(NUM_SHIPS);
    for &length in FLEET_LENGTHS.iter() {
        let ship = place_ship(rng, length, &free, &ships)?;
        free &= !ship.mask();
        ships.push(ship);
    }
    Ok(ships)
}

fn place_ship<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    free: &BB,
    placed: &[Ship],
) -> Result<Ship, BoardError> {
    let span = length as i32 - 1;
    for attempt in 0..GENERATION_ATTEMPT_LIMIT {
        let (r, c) = free
            .random_set_bit(rng)
            .ok_or(BoardError::GenerationFailed { length })?;
        let start = Coordinate::from_index(r, c)?;
        let (dx, dy) = DIRECTIONS[rng.random_range(0..DIRECTIONS.len())];
        let Some(end) = start.offset(dx * span, dy * span) else {
            continue;
        };
        let candidate = Ship::new(start, end)?;
        if !candidate.mask().is_subset(free) {
            continue;
        }
        if placed.iter().any(|ship| candidate.is_near_ship(ship)) {
            continue;
        }
        trace!("placed length {} ship after {} redraws", length, attempt);
        return Ok(candidate);
    }
    Err(BoardError::GenerationFailed { length })
}
