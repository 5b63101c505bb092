use alloc::boxed::Box;

use log::{debug, info};
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{BoardError, GuessResult},
    config::DEFAULT_MAX_TURNS,
    coord::Coordinate,
    player::Player,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    /// The seat (0 or 1) that sank the whole opposing fleet.
    Won(usize),
}

/// What happened on one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    /// 1-based turn number.
    pub turn: usize,
    pub attacker: usize,
    pub target: Coordinate,
    pub result: GuessResult,
    /// The attacker plays again after a hit.
    pub extra_turn: bool,
    pub status: GameStatus,
}

/// A player together with the board holding its own fleet.
pub struct Seat {
    player: Box<dyn Player>,
    board: Board,
}

impl Seat {
    pub fn new(player: Box<dyn Player>, board: Board) -> Self {
        Self { player, board }
    }
}

/// Turn loop for two seats. Seat 0 moves first.
pub struct GameEngine {
    seats: [Seat; 2],
    current: usize,
    turns: usize,
    max_turns: usize,
}

impl GameEngine {
    pub fn new(first: Seat, second: Seat) -> Self {
        Self {
            seats: [first, second],
            current: 0,
            turns: 0,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }

    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Seat whose turn it is.
    pub fn current_seat(&self) -> usize {
        self.current
    }

    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn player(&self, seat: usize) -> &dyn Player {
        self.seats[seat].player.as_ref()
    }

    pub fn board(&self, seat: usize) -> &Board {
        &self.seats[seat].board
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.seats[1].board.all_sunk() {
            GameStatus::Won(0)
        } else if self.seats[0].board.all_sunk() {
            GameStatus::Won(1)
        } else {
            GameStatus::InProgress
        }
    }

    /// Let the current seat attack once and feed the result back to it.
    /// Fails with [`BoardError::GameOver`] once a fleet is sunk.
    pub fn play_turn(&mut self, rng: &mut SmallRng) -> Result<TurnReport, BoardError> {
        if self.status() != GameStatus::InProgress {
            return Err(BoardError::GameOver);
        }
        if self.turns >= self.max_turns {
            return Err(BoardError::TurnLimitReached { turns: self.turns });
        }
        let attacker_seat = self.current;
        let [first, second] = &mut self.seats;
        let (attacker, defender) = if attacker_seat == 0 {
            (first, second)
        } else {
            (second, first)
        };

        let view = defender.board.visible_grid_fog_of_war();
        let target = attacker.player.select_target(rng, &view)?;
        let result = defender.board.attack(target);
        attacker.player.handle_guess_result(target, result);
        if result.is_sunk() {
            if let Some(ship) = defender.board.ship_at(target) {
                attacker.player.handle_sunk_ship(ship);
            }
        }
        debug!("{} attacks {} at {}: {}", attacker.player.name(), defender.player.name(), target, result);

        self.turns += 1;
        let extra_turn = result.is_hit();
        if !extra_turn {
            self.current = 1 - attacker_seat;
        }
        let status = self.status();
        if let GameStatus::Won(seat) = status {
            info!("{} wins after {} turns", self.seats[seat].player.name(), self.turns);
        }
        Ok(TurnReport {
            turn: self.turns,
            attacker: attacker_seat,
            target,
            result,
            extra_turn,
            status,
        })
    }

    /// Play until one fleet is sunk, calling `on_turn` after every attack.
    /// Returns the winning seat.
    pub fn run<F>(&mut self, rng: &mut SmallRng, mut on_turn: F) -> Result<usize, BoardError>
    where
        F: FnMut(&GameEngine, &TurnReport),
    {
        loop {
            if let GameStatus::Won(seat) = self.status() {
                return Ok(seat);
            }
            let report = self.play_turn(rng)?;
            on_turn(self, &report);
        }
    }
}
