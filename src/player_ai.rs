use alloc::string::String;

use rand::rngs::SmallRng;

use crate::{
    ai::{AvoidanceTargeting, HuntTargeting},
    board::Grid,
    common::{BoardError, GuessResult},
    coord::Coordinate,
    player::Player,
    ship::Ship,
};

/// Computer player, one variant per targeting strategy.
#[derive(Debug, Clone)]
pub enum AiPlayer {
    Hunt { name: String, strategy: HuntTargeting },
    Avoidance { name: String, strategy: AvoidanceTargeting },
}

impl AiPlayer {
    pub fn hunt(name: String) -> Self {
        AiPlayer::Hunt {
            name,
            strategy: HuntTargeting::new(),
        }
    }

    pub fn avoidance(name: String) -> Self {
        AiPlayer::Avoidance {
            name,
            strategy: AvoidanceTargeting::new(),
        }
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        match self {
            AiPlayer::Hunt { name, .. } | AiPlayer::Avoidance { name, .. } => name,
        }
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        _opponent_view: &Grid,
    ) -> Result<Coordinate, BoardError> {
        match self {
            AiPlayer::Hunt { strategy, .. } => strategy.next_target(rng),
            AiPlayer::Avoidance { strategy, .. } => strategy.next_target(rng),
        }
    }

    fn handle_guess_result(&mut self, coord: Coordinate, result: GuessResult) {
        if let AiPlayer::Hunt { strategy, .. } = self {
            strategy.observe(coord, result);
        }
    }

    fn handle_sunk_ship(&mut self, ship: &Ship) {
        if let AiPlayer::Avoidance { strategy, .. } = self {
            strategy.record_sunk_ship(*ship);
        }
    }
}
