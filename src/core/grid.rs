//! A square, row-major grid of cells.
//!
//! Both the occupancy grid (`Grid<Option<ShipVariant>>`) and the guess grid
//! (`Grid<CellState>`) are stored in this type. Grids handed out by the board
//! are owned clones, so callers cannot reach back into board state.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::core::ship::ShipVariant;

/// Guess state of a single cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Unguessed,
    Hit,
    Miss,
}

/// Which ship, if any, covers each cell.
pub type ShipGrid = Grid<Option<ShipVariant>>;

/// Guess outcome of each cell.
pub type CellGrid = Grid<CellState>;

/// An N×N grid stored in a flat vector.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `fill`.
    pub fn filled(size: usize, fill: T) -> Self {
        Grid {
            size,
            cells: vec![fill; size * size],
        }
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: T) {
        for cell in self.cells.iter_mut() {
            *cell = value.clone();
        }
    }
}

impl<T: Clone + Default> Grid<T> {
    pub fn new(size: usize) -> Self {
        Self::filled(size, T::default())
    }
}

impl<T> Grid<T> {
    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if self.in_bounds(row, col) {
            self.cells.get(row * self.size + col)
        } else {
            None
        }
    }

    pub(crate) fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if self.in_bounds(row, col) {
            self.cells.get_mut(row * self.size + col)
        } else {
            None
        }
    }

    /// Iterator over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks(0) panics; an empty grid simply has no rows
        self.cells.chunks(self.size.max(1))
    }

    /// Iterator over `((row, col), &cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        let n = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i / n, i % n), cell))
    }

    /// Number of cells matching `pred`.
    pub fn count(&self, mut pred: impl FnMut(&T) -> bool) -> usize {
        self.cells.iter().filter(|c| pred(c)).count()
    }
}

impl<T: fmt::Debug> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}>:", self.size)?;
        for row in self.rows() {
            writeln!(f, "  {:?}", row)?;
        }
        Ok(())
    }
}
