//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiPlayer, Board, BoardError, Coordinate, GameEngine, GameStatus, GuessResult, Player,
    PlayerKind, PlayerNames, Seat, Ship,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, ui::render_grid, CliPlayer};
