//! Ship definitions and hit counting.

use core::fmt;

use crate::common::BoardError;

/// Index of a ship within the board that owns it.
pub type ShipId = usize;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends along columns.
    Horizontal,
    /// Extends along rows.
    Vertical,
}

impl Orientation {
    /// Cell `offset` steps from `(row, col)`, saturating at `usize::MAX`.
    pub(crate) fn step(self, row: usize, col: usize, offset: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (row, col.saturating_add(offset)),
            Orientation::Vertical => (row.saturating_add(offset), col),
        }
    }
}

/// A ship counting hits toward its size.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    size: usize,
    hits: usize,
}

impl Ship {
    /// Create an undamaged ship. `size` must be positive.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidShipSize);
        }
        Ok(Ship { size, hits: 0 })
    }

    /// Register one hit. Returns `true` once the ship is sunk.
    ///
    /// There is no upper bound: further calls keep counting and keep
    /// returning `true`.
    pub fn hit(&mut self) -> bool {
        self.hits += 1;
        self.is_sunk()
    }

    pub fn is_sunk(&self) -> bool {
        self.hits >= self.size
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn hits(&self) -> usize {
        self.hits
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ size: {}, hits: {}, sunk: {} }}",
            self.size,
            self.hits,
            self.is_sunk()
        )
    }
}
