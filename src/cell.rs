//! A single grid position.

use crate::common::FireResult;
use crate::ship::ShipId;

/// What a cell looks like from the outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Unfired,
    Hit,
    Miss,
}

/// Occupancy and fired status of one grid position.
///
/// `is_hit` only ever goes from `false` to `true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    ship: Option<ShipId>,
    is_hit: bool,
}

impl Cell {
    /// An unoccupied, unfired cell.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_ship(&self) -> bool {
        self.ship.is_some()
    }

    /// Id of the ship occupying this cell, if any.
    pub fn ship(&self) -> Option<ShipId> {
        self.ship
    }

    pub fn is_hit(&self) -> bool {
        self.is_hit
    }

    pub(crate) fn occupy(&mut self, id: ShipId) {
        self.ship = Some(id);
    }

    /// Fire at this cell. Only the first call changes anything.
    pub fn fire(&mut self) -> FireResult {
        if self.is_hit {
            return FireResult::AlreadyFired;
        }
        self.is_hit = true;
        if self.has_ship() {
            FireResult::Hit
        } else {
            FireResult::Miss
        }
    }

    pub fn state(&self) -> CellState {
        match (self.is_hit, self.has_ship()) {
            (false, _) => CellState::Unfired,
            (true, true) => CellState::Hit,
            (true, false) => CellState::Miss,
        }
    }
}
