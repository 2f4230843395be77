use alloc::vec::Vec;

use super::common::BoardError;
use super::ship::ShipVariant;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const STANDARD_FLEET: [ShipVariant; NUM_SHIPS] = ShipVariant::ALL;

/// Total number of ship cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Samples tried per ship before placement gives up.
pub const DEFAULT_PLACEMENT_ATTEMPTS: usize = 1000;

/// Game settings. `max_guesses == 0` means no guess limit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub grid_size: usize,
    pub fleet: Vec<ShipVariant>,
    pub max_guesses: usize,
    pub placement_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid_size: BOARD_SIZE,
            fleet: STANDARD_FLEET.to_vec(),
            max_guesses: 0,
            placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
        }
    }
}

impl GameConfig {
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_fleet(mut self, fleet: impl Into<Vec<ShipVariant>>) -> Self {
        self.fleet = fleet.into();
        self
    }

    pub fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    pub fn with_placement_attempts(mut self, attempts: usize) -> Self {
        self.placement_attempts = attempts;
        self
    }

    /// Reject unusable grid sizes and fleets that name a variant twice.
    pub fn validate(&self) -> Result<(), BoardError> {
        grid_capacity(self.grid_size)?;
        validate_fleet(&self.fleet)
    }

    /// Sum of the lengths of every ship in the fleet.
    pub fn total_ship_cells(&self) -> usize {
        self.fleet.iter().map(|v| v.length()).sum()
    }
}

/// Number of cells on a `grid_size`×`grid_size` board; rejects 0 and sizes
/// whose square overflows `usize`.
pub fn grid_capacity(grid_size: usize) -> Result<usize, BoardError> {
    match grid_size.checked_mul(grid_size) {
        Some(cells) if cells > 0 => Ok(cells),
        _ => Err(BoardError::InvalidGridSize(grid_size)),
    }
}

pub(crate) fn validate_fleet(fleet: &[ShipVariant]) -> Result<(), BoardError> {
    for (i, v) in fleet.iter().enumerate() {
        if fleet[..i].contains(v) {
            return Err(BoardError::DuplicateShip(*v));
        }
    }
    Ok(())
}
