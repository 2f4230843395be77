use log::info;
use num_traits::PrimInt;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::core::{
    board::Board,
    common::{BoardError, GameStatus, GuessOutcome},
    config::GameConfig,
    grid::{CellGrid, ShipGrid},
    placement::place_fleet,
    ship::ShipVariant,
};

/// Game controller: places the fleet and forwards guesses to the board.
pub struct Game<R: Rng = SmallRng> {
    config: GameConfig,
    board: Board,
    rng: R,
}

#[cfg(feature = "std")]
impl Game<SmallRng> {
    /// Create a game whose placements are seeded from the thread RNG.
    pub fn new(config: GameConfig) -> Result<Self, BoardError> {
        let mut seed_rng = rand::rng();
        Self::with_rng(config, SmallRng::from_rng(&mut seed_rng))
    }
}

impl Game<SmallRng> {
    /// Create a game with reproducible placements.
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self, BoardError> {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Create an unstarted game drawing placements from `rng`.
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, BoardError> {
        config.validate()?;
        let board = Board::new(config.grid_size).with_max_guesses(config.max_guesses);
        Ok(Game { config, board, rng })
    }

    /// Place a fresh fleet and clear all guesses. Prior state is discarded.
    ///
    /// On error the previous board is left untouched.
    pub fn start_game(&mut self) -> Result<(), BoardError> {
        let layout = place_fleet(
            self.config.grid_size,
            &self.config.fleet,
            self.config.placement_attempts,
            &mut self.rng,
        )?;
        self.board.reset(layout);
        info!(
            "new game: {} ships on {}x{}, guess limit {}",
            self.config.fleet.len(),
            self.config.grid_size,
            self.config.grid_size,
            self.config.max_guesses
        );
        Ok(())
    }

    /// Fire at (`row`, `col`); returns `true` on a hit.
    pub fn submit_guess<I: PrimInt>(&mut self, row: I, col: I) -> Result<bool, BoardError> {
        self.guess(row, col).map(|outcome| outcome.is_hit())
    }

    /// Fire at (`row`, `col`) and report hit, miss or sink.
    pub fn guess<I: PrimInt>(&mut self, row: I, col: I) -> Result<GuessOutcome, BoardError> {
        self.board.submit_guess(row, col)
    }

    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    pub fn are_all_ships_sunk(&self) -> bool {
        self.board.are_all_ships_sunk()
    }

    pub fn is_ship_fully_sunk(&self, variant: ShipVariant) -> bool {
        self.board.is_ship_fully_sunk(variant)
    }

    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    pub fn guess_count(&self) -> usize {
        self.board.guess_count()
    }

    pub fn max_guesses(&self) -> usize {
        self.board.max_guesses()
    }

    pub fn cell_grid(&self) -> CellGrid {
        self.board.cell_grid()
    }

    pub fn ship_grid(&self) -> ShipGrid {
        self.board.ship_grid()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }
}
