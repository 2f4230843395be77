//! Ship variants, orientations and placements.

use core::fmt;

use crate::core::common::BoardError;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// The closed set of ships that can make up a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipVariant {
    Carrier,
    Battleship,
    Submarine,
    Destroyer,
    PatrolBoat,
}

impl ShipVariant {
    /// Every variant, largest first.
    pub const ALL: [ShipVariant; 5] = [
        ShipVariant::Carrier,
        ShipVariant::Battleship,
        ShipVariant::Submarine,
        ShipVariant::Destroyer,
        ShipVariant::PatrolBoat,
    ];

    /// Number of cells the ship covers.
    pub const fn length(self) -> usize {
        match self {
            ShipVariant::Carrier => 5,
            ShipVariant::Battleship => 4,
            ShipVariant::Submarine => 3,
            ShipVariant::Destroyer => 3,
            ShipVariant::PatrolBoat => 2,
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            ShipVariant::Carrier => "Carrier",
            ShipVariant::Battleship => "Battleship",
            ShipVariant::Submarine => "Submarine",
            ShipVariant::Destroyer => "Destroyer",
            ShipVariant::PatrolBoat => "Patrol Boat",
        }
    }
}

impl fmt::Display for ShipVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A ship anchored at (`row`, `col`) and extending right or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    variant: ShipVariant,
    row: usize,
    col: usize,
    orientation: Orientation,
}

impl Placement {
    /// Build a placement that fits on a `grid_size`×`grid_size` board.
    pub fn new(
        variant: ShipVariant,
        row: usize,
        col: usize,
        orientation: Orientation,
        grid_size: usize,
    ) -> Result<Self, BoardError> {
        let len = variant.length();
        let fits = match orientation {
            _ if len > grid_size => false,
            Orientation::Horizontal => row < grid_size && col <= grid_size - len,
            Orientation::Vertical => col < grid_size && row <= grid_size - len,
        };
        if !fits {
            return Err(BoardError::ShipOutOfBounds);
        }
        Ok(Placement {
            variant,
            row,
            col,
            orientation,
        })
    }

    pub fn variant(&self) -> ShipVariant {
        self.variant
    }

    /// Origin of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells covered by the ship, starting at the origin.
    pub fn cells(&self) -> Cells {
        Cells {
            placement: *self,
            next: 0,
        }
    }

    /// Returns `true` if the ship covers (`row`, `col`).
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells().any(|cell| cell == (row, col))
    }
}

/// Iterator over the cells of a [`Placement`].
#[derive(Clone, Copy)]
pub struct Cells {
    placement: Placement,
    next: usize,
}

impl Iterator for Cells {
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.placement.variant.length() {
            return None;
        }
        let i = self.next;
        self.next += 1;
        let (r, c) = self.placement.origin();
        Some(match self.placement.orientation {
            Orientation::Horizontal => (r, c + i),
            Orientation::Vertical => (r + i, c),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.placement.variant.length() - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Cells {}
