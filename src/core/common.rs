//! Common types for the board: errors and guess outcomes.

use crate::core::ship::ShipVariant;

/// Result of a successful guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessOutcome {
    /// Guess hit a ship that still has intact cells.
    Hit,
    /// Guess missed all ships.
    Miss,
    /// Guess hit the last intact cell of a ship.
    Sink(ShipVariant),
}

impl GuessOutcome {
    /// `true` for both `Hit` and `Sink`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, GuessOutcome::Miss)
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    NotStarted,
    InProgress,
    /// Every ship in the fleet is sunk.
    Won,
    /// The guess budget ran out first.
    Lost,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

/// Errors returned by board, placement and game operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Guess coordinate lies outside the grid. Values that do not fit in
    /// `i128` are reported as `i128::MAX`.
    OutOfBounds { row: i128, col: i128 },
    /// The cell was already guessed.
    DuplicateGuess { row: usize, col: usize },
    /// Placement retry budget ran out for this ship.
    UnplaceableFleet { variant: ShipVariant, attempts: usize },
    /// Ship would extend past the edge of the grid.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Variant appears twice in the fleet or is already on the board.
    DuplicateShip(ShipVariant),
    /// Grid size must be at least 1 and its square must fit in `usize`.
    InvalidGridSize(usize),
    /// The game has ended; reset before guessing again.
    GameOver,
    /// No fleet has been placed yet.
    NotStarted,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Guess ({}, {}) is outside the grid", row, col)
            }
            BoardError::DuplicateGuess { row, col } => {
                write!(f, "Cell ({}, {}) was already guessed", row, col)
            }
            BoardError::UnplaceableFleet { variant, attempts } => write!(
                f,
                "Unable to place {} after {} attempts; grid too small for fleet",
                variant, attempts
            ),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::DuplicateShip(v) => write!(f, "{} is already part of the fleet", v),
            BoardError::InvalidGridSize(n) => write!(f, "Invalid grid size {}", n),
            BoardError::GameOver => write!(f, "Game is over"),
            BoardError::NotStarted => write!(f, "Game has not been started"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
