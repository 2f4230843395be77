//! Core battleship board engine (no_std + alloc compatible)
//!
//! This module holds the pure game logic: fleet placement, the board state
//! machine and the game controller. It only depends on num-traits, log and
//! rand, so it can be built without `std`.

pub mod board;
pub mod common;
pub mod config;
pub mod game;
pub mod grid;
pub mod placement;
pub mod ship;

// Re-export commonly used types
pub use board::Board;
pub use common::{BoardError, GameStatus, GuessOutcome};
pub use config::*;
pub use game::Game;
pub use grid::{CellGrid, CellState, Grid, ShipGrid};
pub use placement::{place_fleet, random_placement, Layout};
pub use ship::{Orientation, Placement, ShipVariant};
