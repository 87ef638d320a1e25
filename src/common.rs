//! Common types for the board: errors and firing results.

/// Result of firing at a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireResult {
    /// The cell held a ship.
    Hit,
    /// The cell was empty.
    Miss,
    /// The cell had been fired at before; nothing changed.
    AlreadyFired,
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the grid. Signed so rejected input keeps its value.
    OutOfBounds { row: i64, col: i64 },
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Board constructed with a zero dimension.
    InvalidDimensions { rows: usize, cols: usize },
    /// Ship constructed with size zero.
    InvalidShipSize,
}

impl BoardError {
    pub(crate) fn out_of_bounds(row: usize, col: usize) -> Self {
        BoardError::OutOfBounds {
            row: i64::try_from(row).unwrap_or(i64::MAX),
            col: i64::try_from(col).unwrap_or(i64::MAX),
        }
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is out of bounds", row, col)
            }
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::InvalidDimensions { rows, cols } => {
                write!(f, "Board dimensions {}x{} must both be positive", rows, cols)
            }
            BoardError::InvalidShipSize => write!(f, "Ship size must be positive"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
