//! Player trait and naming.

use alloc::format;
use alloc::string::String;

use rand::rngs::SmallRng;

use crate::{board::Grid, common::BoardError, common::GuessResult, coord::Coordinate, ship::Ship};

/// Interface implemented by different player types.
///
/// A player only chooses targets and learns from the results; the boards are
/// owned and mutated by the game engine.
pub trait Player {
    /// Display name of the player.
    fn name(&self) -> &str;

    /// Choose the next coordinate to attack, given the opponent board as the
    /// attacker is allowed to see it.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        opponent_view: &Grid,
    ) -> Result<Coordinate, BoardError>;

    /// Inform the player of the result of its last attack.
    fn handle_guess_result(&mut self, _coord: Coordinate, _result: GuessResult) {}

    /// Inform the player of the opponent ship its last attack sank.
    fn handle_sunk_ship(&mut self, _ship: &Ship) {}
}

/// The kinds of player a game can seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum, serde::Serialize, serde::Deserialize))]
pub enum PlayerKind {
    /// Keyboard-controlled player.
    Human,
    /// Computer player using hunt-adjacency targeting.
    Hunt,
    /// Computer player using random-avoidance targeting.
    Random,
}

/// Hands out default player names (`player_1`, `player_2`, ...) for one
/// session.
#[derive(Debug, Clone, Default)]
pub struct PlayerNames {
    issued: usize,
}

impl PlayerNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more player and return `requested`, or the default name if
    /// none was given.
    pub fn assign(&mut self, requested: Option<&str>) -> String {
        self.issued += 1;
        match requested {
            Some(name) => String::from(name),
            None => format!("player_{}", self.issued),
        }
    }

    /// Number of players named so far.
    pub fn issued(&self) -> usize {
        self.issued
    }
}
