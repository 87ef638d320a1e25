//! Game board: a fixed grid of cells plus the ships placed on it.

use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
use rand::Rng;

use crate::cell::Cell;
use crate::common::{BoardError, FireResult};
use crate::ship::{Orientation, Ship, ShipId};

/// A `rows x cols` grid of cells. Dimensions never change after construction.
pub struct Board {
    rows: usize,
    cols: usize,
    grid: Vec<Vec<Cell>>,
    ships: Vec<Ship>,
}

impl Board {
    /// Create a board of fresh (unoccupied, unfired) cells.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Board {
            rows,
            cols,
            grid: vec![vec![Cell::new(); cols]; rows],
            ships: Vec::new(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), BoardError> {
        if row >= self.rows || col >= self.cols {
            return Err(BoardError::out_of_bounds(row, col));
        }
        Ok(())
    }

    /// Convert signed coordinates coming from an input surface into grid indices.
    pub fn locate(&self, row: i64, col: i64) -> Result<(usize, usize), BoardError> {
        let oob = BoardError::OutOfBounds { row, col };
        let r = usize::try_from(row).map_err(|_| oob)?;
        let c = usize::try_from(col).map_err(|_| oob)?;
        self.check_bounds(r, c).map_err(|_| oob)?;
        Ok((r, c))
    }

    /// Cell at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell, BoardError> {
        self.check_bounds(row, col)?;
        Ok(&self.grid[row][col])
    }

    /// All cells in row-major order with their coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Cell)> + '_ {
        self.grid
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, cell)| (r, c, cell)))
    }

    /// Ships placed so far, indexed by [`ShipId`].
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Ship occupying (row, col), if any.
    pub fn ship_at(&self, row: usize, col: usize) -> Result<Option<&Ship>, BoardError> {
        Ok(self.cell(row, col)?.ship().map(|id| &self.ships[id]))
    }

    /// Place `ship` with its first segment at (`start_row`, `start_col`).
    ///
    /// Horizontal ships extend along columns, vertical ships along rows.
    /// Nothing is modified unless every segment is in bounds and free.
    pub fn place_ship(
        &mut self,
        ship: Ship,
        start_row: usize,
        start_col: usize,
        orientation: Orientation,
    ) -> Result<ShipId, BoardError> {
        let mut coords = Vec::with_capacity(ship.size());
        for i in 0..ship.size() {
            let (r, c) = orientation.step(start_row, start_col, i);
            self.check_bounds(r, c)?;
            if self.grid[r][c].has_ship() {
                return Err(BoardError::ShipOverlaps);
            }
            coords.push((r, c));
        }

        let id = self.ships.len();
        for (r, c) in coords {
            self.grid[r][c].occupy(id);
        }
        self.ships.push(ship);
        Ok(id)
    }

    /// Fire at (row, col) and report what the cell says.
    ///
    /// A first hit on an occupied cell also counts against the owning ship.
    pub fn fire_at(&mut self, row: usize, col: usize) -> Result<FireResult, BoardError> {
        self.check_bounds(row, col)?;
        let cell = &mut self.grid[row][col];
        let result = cell.fire();
        if result == FireResult::Hit {
            if let Some(id) = cell.ship() {
                self.ships[id].hit();
            }
        }
        Ok(result)
    }

    /// Uniformly random in-bounds coordinate, fired or not.
    pub fn random_coord<R: Rng>(&self, rng: &mut R) -> (usize, usize) {
        (rng.random_range(0..self.rows), rng.random_range(0..self.cols))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("ships", &self.ships)
            .finish_non_exhaustive()
    }
}
