#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod ai;
mod bitboard;
mod board;
mod common;
mod config;
mod coord;
mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
#[cfg(feature = "std")]
pub mod ui;
mod ship;

pub use ai::*;
pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::Coordinate;
pub use fleet::generate_ships;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use ship::*;
