#![cfg(feature = "std")]

//! Serializable, read-only views of a game for hosting applications.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::{CellGrid, Game, GameStatus, ShipGrid, ShipVariant};

/// Point-in-time copy of a game's public state.
///
/// The ship grid is only included when requested or once the game is over,
/// so a snapshot sent to a player does not reveal ship positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub status: GameStatus,
    pub guess_count: usize,
    pub max_guesses: usize,
    pub cells: CellGrid,
    pub sunk: Vec<ShipVariant>,
    pub ships: Option<ShipGrid>,
}

impl Snapshot {
    pub fn capture<R: Rng>(game: &Game<R>, reveal_ships: bool) -> Self {
        let board = game.board();
        let sunk = board
            .fleet()
            .filter(|v| board.is_ship_fully_sunk(*v))
            .collect();
        let reveal = reveal_ships || board.is_game_over();
        Snapshot {
            status: board.status(),
            guess_count: board.guess_count(),
            max_guesses: board.max_guesses(),
            cells: board.cell_grid(),
            sunk,
            ships: reveal.then(|| board.ship_grid()),
        }
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> anyhow::Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by [`Snapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
