//! Board state for one game session: ship occupancy, guesses and the guess
//! counter.

use alloc::vec::Vec;
use core::fmt;
use log::{debug, info};
use num_traits::PrimInt;

use super::common::{BoardError, GameStatus, GuessOutcome};
use super::config::grid_capacity;
use super::grid::{CellGrid, CellState, ShipGrid};
use super::placement::Layout;
use super::ship::{Placement, ShipVariant};

/// Ship occupancy, guess outcomes and the guess counter.
///
/// A fresh board is not started and rejects guesses until [`Board::reset`]
/// installs a layout. Failed guesses never change any state.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    ships: ShipGrid,
    cells: CellGrid,
    placements: Vec<Placement>,
    guess_count: usize,
    max_guesses: usize,
    started: bool,
}

impl Board {
    /// Create an empty, unstarted board.
    pub fn new(grid_size: usize) -> Self {
        Board {
            ships: ShipGrid::new(grid_size),
            cells: CellGrid::new(grid_size),
            placements: Vec::new(),
            guess_count: 0,
            max_guesses: 0,
            started: false,
        }
    }

    /// Build a started board from explicit placements.
    pub fn from_placements(
        grid_size: usize,
        placements: impl IntoIterator<Item = Placement>,
    ) -> Result<Self, BoardError> {
        grid_capacity(grid_size)?;
        let mut layout = Layout::empty(grid_size);
        for p in placements {
            layout.add(p)?;
        }
        let mut board = Board::new(grid_size);
        board.reset(layout);
        Ok(board)
    }

    /// Limit the number of guesses; `0` removes the limit.
    pub fn set_max_guesses(&mut self, max_guesses: usize) {
        self.max_guesses = max_guesses;
    }

    pub fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.set_max_guesses(max_guesses);
        self
    }

    /// Install a new layout and clear all guesses.
    pub fn reset(&mut self, layout: Layout) {
        let (ships, placements) = layout.into_parts();
        self.cells = CellGrid::new(ships.size());
        self.ships = ships;
        self.placements = placements;
        self.guess_count = 0;
        self.started = true;
        debug!(
            "board reset: {} ship(s) on {}x{}",
            self.placements.len(),
            self.ships.size(),
            self.ships.size()
        );
    }

    /// Fire at (`row`, `col`).
    ///
    /// Negative or too-large coordinates yield [`BoardError::OutOfBounds`],
    /// with values beyond `i128` saturated to `i128::MAX` in the error;
    /// a repeated cell yields [`BoardError::DuplicateGuess`].
    pub fn submit_guess<I: PrimInt>(&mut self, row: I, col: I) -> Result<GuessOutcome, BoardError> {
        if !self.started {
            return Err(BoardError::NotStarted);
        }
        if self.is_game_over() {
            return Err(BoardError::GameOver);
        }
        let (r, c) = match (row.to_usize(), col.to_usize()) {
            (Some(r), Some(c)) if self.cells.in_bounds(r, c) => (r, c),
            _ => {
                return Err(BoardError::OutOfBounds {
                    row: row.to_i128().unwrap_or(i128::MAX),
                    col: col.to_i128().unwrap_or(i128::MAX),
                })
            }
        };
        if self.cells.get(r, c) != Some(&CellState::Unguessed) {
            return Err(BoardError::DuplicateGuess { row: r, col: c });
        }

        let target = self.ships.get(r, c).copied().flatten();
        if let Some(cell) = self.cells.get_mut(r, c) {
            *cell = if target.is_some() {
                CellState::Hit
            } else {
                CellState::Miss
            };
        }
        self.guess_count += 1;

        let outcome = match target {
            Some(variant) if self.is_ship_fully_sunk(variant) => {
                info!("{} sunk after {} guesses", variant, self.guess_count);
                GuessOutcome::Sink(variant)
            }
            Some(_) => GuessOutcome::Hit,
            None => GuessOutcome::Miss,
        };
        debug!("guess ({}, {}) -> {:?}", r, c, outcome);
        if self.is_game_over() {
            info!(
                "game over: {:?} after {} guesses",
                self.status(),
                self.guess_count
            );
        }
        Ok(outcome)
    }

    /// `true` if `variant` is on the board and every one of its cells is hit.
    pub fn is_ship_fully_sunk(&self, variant: ShipVariant) -> bool {
        let mut covered = false;
        for ((r, c), ship) in self.ships.iter() {
            if *ship == Some(variant) {
                covered = true;
                if self.cells.get(r, c) != Some(&CellState::Hit) {
                    return false;
                }
            }
        }
        covered
    }

    /// `true` once every ship of the fleet is sunk.
    pub fn are_all_ships_sunk(&self) -> bool {
        self.started
            && self
                .placements
                .iter()
                .all(|p| self.is_ship_fully_sunk(p.variant()))
    }

    /// Number of ships still afloat.
    pub fn ships_remaining(&self) -> usize {
        self.placements
            .iter()
            .filter(|p| !self.is_ship_fully_sunk(p.variant()))
            .count()
    }

    pub fn status(&self) -> GameStatus {
        if !self.started {
            GameStatus::NotStarted
        } else if self.are_all_ships_sunk() {
            GameStatus::Won
        } else if self.max_guesses > 0 && self.guess_count >= self.max_guesses {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.status().is_over()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Copy of the occupancy grid.
    pub fn ship_grid(&self) -> ShipGrid {
        self.ships.clone()
    }

    /// Copy of the guess grid.
    pub fn cell_grid(&self) -> CellGrid {
        self.cells.clone()
    }

    pub fn guess_count(&self) -> usize {
        self.guess_count
    }

    /// Configured guess limit; `0` means unlimited.
    pub fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    pub fn grid_size(&self) -> usize {
        self.ships.size()
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Ship variants on the board, in placement order.
    pub fn fleet(&self) -> impl Iterator<Item = ShipVariant> + '_ {
        self.placements.iter().map(|p| p.variant())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  status: {:?},\n  guesses: {}/{},\n  placements: {:?},\n  cells: {:?}\n}}",
            self.status(),
            self.guess_count,
            self.max_guesses,
            self.placements,
            self.cells
        )
    }
}
