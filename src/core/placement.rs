//! Random fleet placement.
//!
//! Ships are placed greedily in fleet order. Each ship samples a random
//! orientation and an in-bounds origin until the candidate cells are all free
//! of previously committed ships. There is no backtracking across ships; a
//! ship that fails `max_attempts` samples aborts the whole placement with
//! [`BoardError::UnplaceableFleet`].

use alloc::vec::Vec;
use log::{debug, warn};
use rand::Rng;

use super::common::BoardError;
use super::config::{grid_capacity, validate_fleet};
use super::grid::ShipGrid;
use super::ship::{Orientation, Placement, ShipVariant};

/// A fully placed fleet: the occupancy grid plus the placements that built it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    grid: ShipGrid,
    placements: Vec<Placement>,
}

impl Layout {
    /// Empty layout for a `grid_size`×`grid_size` board.
    pub fn empty(grid_size: usize) -> Self {
        Layout {
            grid: ShipGrid::new(grid_size),
            placements: Vec::new(),
        }
    }

    pub fn grid(&self) -> &ShipGrid {
        &self.grid
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Returns `true` if none of the placement's cells are occupied.
    pub fn is_free(&self, placement: &Placement) -> bool {
        placement
            .cells()
            .all(|(r, c)| matches!(self.grid.get(r, c), Some(None)))
    }

    /// Commit a placement after checking bounds, overlap and duplicates.
    pub fn add(&mut self, placement: Placement) -> Result<(), BoardError> {
        let variant = placement.variant();
        if self.placements.iter().any(|p| p.variant() == variant) {
            return Err(BoardError::DuplicateShip(variant));
        }
        let (row, col) = placement.origin();
        // revalidate against this grid's size
        Placement::new(variant, row, col, placement.orientation(), self.grid.size())?;
        if !self.is_free(&placement) {
            return Err(BoardError::ShipOverlaps);
        }
        for (r, c) in placement.cells() {
            if let Some(cell) = self.grid.get_mut(r, c) {
                *cell = Some(variant);
            }
        }
        self.placements.push(placement);
        Ok(())
    }

    pub(crate) fn into_parts(self) -> (ShipGrid, Vec<Placement>) {
        (self.grid, self.placements)
    }
}

/// Sample a non-overlapping placement for `variant` against `layout`.
pub fn random_placement<R: Rng + ?Sized>(
    layout: &Layout,
    variant: ShipVariant,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Placement, BoardError> {
    let n = layout.grid().size();
    let len = variant.length();
    if len > n {
        return Err(BoardError::UnplaceableFleet {
            variant,
            attempts: 0,
        });
    }
    for attempt in 1..=max_attempts {
        let orient = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let max_r = if orient == Orientation::Vertical {
            n - len
        } else {
            n - 1
        };
        let max_c = if orient == Orientation::Horizontal {
            n - len
        } else {
            n - 1
        };
        let r = rng.random_range(0..=max_r);
        let c = rng.random_range(0..=max_c);
        let candidate = Placement::new(variant, r, c, orient, n)?;
        if layout.is_free(&candidate) {
            debug!(
                "placed {} at ({}, {}) {:?} after {} attempt(s)",
                variant, r, c, orient, attempt
            );
            return Ok(candidate);
        }
    }
    Err(BoardError::UnplaceableFleet {
        variant,
        attempts: max_attempts,
    })
}

/// Place every ship in `fleet` on an empty `grid_size`×`grid_size` board.
pub fn place_fleet<R: Rng + ?Sized>(
    grid_size: usize,
    fleet: &[ShipVariant],
    max_attempts: usize,
    rng: &mut R,
) -> Result<Layout, BoardError> {
    let capacity = grid_capacity(grid_size)?;
    validate_fleet(fleet)?;

    let mut used = 0;
    let mut layout = Layout::empty(grid_size);
    for &variant in fleet {
        used += variant.length();
        if used > capacity {
            warn!(
                "fleet needs more than {} cells, cannot place {}",
                capacity, variant
            );
            return Err(BoardError::UnplaceableFleet {
                variant,
                attempts: 0,
            });
        }
        let placement = random_placement(&layout, variant, max_attempts, rng).map_err(|e| {
            warn!("fleet placement failed: {}", e);
            e
        })?;
        layout.add(placement)?;
    }
    Ok(layout)
}
