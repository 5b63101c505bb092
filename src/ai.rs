// Targeting strategies for computer players.
// Both keep their own memory of what they fired at; neither looks at the
// opponent's fleet except for ships they have already sunk.

use alloc::vec::Vec;

use log::trace;
use rand::Rng;

use crate::{
    common::{BoardError, GuessResult},
    config::{BB, BOARD_SIZE, TARGETING_ATTEMPT_LIMIT},
    coord::Coordinate,
    ship::Ship,
};

/// Hunt-adjacency targeting.
///
/// Fires at random until a shot hits without sinking, then concentrates on
/// the orthogonal neighbours of that hit. Every resample also offers one
/// fresh random candidate so the search cannot stall once the neighbours are
/// used up.
#[derive(Debug, Clone)]
pub struct HuntTargeting {
    candidates: BB,
    last_shot: Option<Coordinate>,
    last_result: Option<GuessResult>,
}

impl HuntTargeting {
    pub fn new() -> Self {
        Self {
            candidates: BB::full(),
            last_shot: None,
            last_result: None,
        }
    }

    /// Cells this strategy may still choose.
    pub fn candidates(&self) -> BB {
        self.candidates
    }

    pub fn last_shot(&self) -> Option<Coordinate> {
        self.last_shot
    }

    fn is_candidate(&self, coord: Coordinate) -> bool {
        let (r, c) = coord.index();
        self.candidates.contains(r, c)
    }

    fn discard(&mut self, coord: Coordinate) {
        let (r, c) = coord.index();
        let _ = self.candidates.clear(r, c);
    }

    /// Feed back the outcome of the most recent target.
    pub fn observe(&mut self, coord: Coordinate, result: GuessResult) {
        if self.last_shot == Some(coord) {
            self.last_result = Some(result);
        }
    }

    /// Pick the next cell to attack.
    ///
    /// An unreported outcome for the previous shot counts as a miss.
    pub fn next_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Coordinate, BoardError> {
        let Some(last) = self.last_shot else {
            let (r, c) = BB::full()
                .random_set_bit(rng)
                .ok_or(BoardError::NoTargetAvailable)?;
            let target = Coordinate::from_index(r, c)?;
            self.last_shot = Some(target);
            return Ok(target);
        };

        self.discard(last);
        let outcome = self.last_result.take().unwrap_or(GuessResult::Miss);

        // Straight ships never touch, so a hit rules out its diagonals.
        if outcome.is_hit() {
            for diagonal in last.diagonal_neighbors().into_iter().flatten() {
                self.discard(diagonal);
            }
        }

        let target = if outcome == GuessResult::Hit {
            self.follow_up(rng, last)?
        } else {
            self.random_candidate(rng)?
        };
        trace!("hunt: {} after {} at {}", target, outcome, last);
        self.last_shot = Some(target);
        Ok(target)
    }

    fn follow_up<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        hit: Coordinate,
    ) -> Result<Coordinate, BoardError> {
        let neighbors = hit.orthogonal_neighbors();
        for _ in 0..TARGETING_ATTEMPT_LIMIT {
            let pick = rng.random_range(0..=neighbors.len());
            let sample = match neighbors.get(pick) {
                Some(neighbor) => *neighbor,
                None => Some(self.random_candidate(rng)?),
            };
            if let Some(coord) = sample.filter(|c| self.is_candidate(*c)) {
                return Ok(coord);
            }
        }
        self.random_candidate(rng)
    }

    fn random_candidate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Coordinate, BoardError> {
        let (r, c) = self
            .candidates
            .random_set_bit(rng)
            .ok_or(BoardError::NoTargetAvailable)?;
        Coordinate::from_index(r, c)
    }
}

impl Default for HuntTargeting {
    fn default() -> Self {
        Self::new()
    }
}

/// Random-avoidance targeting.
///
/// Uniform rejection sampling over the grid: a draw is accepted only if it
/// was never chosen before and does not lie next to a ship this strategy is
/// known to have sunk.
#[derive(Debug, Clone, Default)]
pub struct AvoidanceTargeting {
    attacked: BB,
    sunk_known: Vec<Ship>,
}

impl AvoidanceTargeting {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cells already chosen.
    pub fn attacked(&self) -> BB {
        self.attacked
    }

    pub fn known_sunk(&self) -> &[Ship] {
        &self.sunk_known
    }

    /// Remember an opponent ship this player sank. Ships still afloat are ignored.
    pub fn record_sunk_ship(&mut self, ship: Ship) {
        if ship.has_sunk() && !self.sunk_known.contains(&ship) {
            self.sunk_known.push(ship);
        }
    }

    fn is_eligible(&self, coord: Coordinate) -> bool {
        let (r, c) = coord.index();
        !self.attacked.contains(r, c) && !self.sunk_known.iter().any(|ship| ship.is_near(coord))
    }

    /// Cells that would pass the acceptance test.
    pub fn eligible(&self) -> BB {
        let mut blocked = self.attacked;
        for ship in &self.sunk_known {
            blocked |= ship.zone();
        }
        !blocked
    }

    /// Pick the next cell to attack and remember it.
    pub fn next_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Coordinate, BoardError> {
        let eligible = self.eligible();
        if eligible.is_empty() {
            return Err(BoardError::NoTargetAvailable);
        }

        let mut target = None;
        for _ in 0..TARGETING_ATTEMPT_LIMIT {
            let x = rng.random_range(1..=BOARD_SIZE);
            let y = rng.random_range(1..=BOARD_SIZE);
            let coord = Coordinate::new(x.into(), y.into())?;
            if self.is_eligible(coord) {
                target = Some(coord);
                break;
            }
        }
        // Conditioning a uniform draw on eligibility is a uniform draw over
        // the eligible cells, so the fallback keeps the same distribution.
        let target = match target {
            Some(coord) => coord,
            None => {
                let (r, c) = eligible
                    .random_set_bit(rng)
                    .ok_or(BoardError::NoTargetAvailable)?;
                Coordinate::from_index(r, c)?
            }
        };

        let (r, c) = target.index();
        self.attacked.set(r, c)?;
        trace!("avoidance: {}", target);
        Ok(target)
    }
}
