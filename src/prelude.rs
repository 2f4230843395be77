//! Commonly used types and utilities for ease of import.

pub use crate::{BoardError, Game, GameConfig, GameStatus, GuessOutcome, ShipVariant};

#[cfg(feature = "std")]
pub use crate::{GameApi, SharedGame, Snapshot};
