#![cfg(feature = "std")]

use rand::Rng;

use crate::{
    board::Board,
    common::{BoardError, FireResult},
    config::GameConfig,
    ship::Ship,
    ui::{render_grid, Notification, NotificationSink},
};

/// A single-player session: one board, one ship, shots reported to a sink.
pub struct Game {
    board: Board,
    shots: usize,
}

impl Game {
    /// Build the board from `config` and place its startup ship.
    pub fn new(config: &GameConfig) -> Result<Self, BoardError> {
        let mut board = Board::new(config.rows, config.cols)?;
        let placement = config.ship;
        let ship = Ship::new(placement.size)?;
        board.place_ship(ship, placement.row, placement.col, placement.orientation)?;
        log::debug!(
            "placed ship of size {} at ({}, {}) {:?}",
            placement.size,
            placement.row,
            placement.col,
            placement.orientation
        );
        Ok(Self { board, shots: 0 })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of shots that changed a cell.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Fire at (row, col) and notify `sink` of the outcome.
    pub fn fire_at(
        &mut self,
        row: usize,
        col: usize,
        sink: &mut dyn NotificationSink,
    ) -> Result<FireResult, BoardError> {
        let result = self.board.fire_at(row, col)?;
        match result {
            FireResult::AlreadyFired => {
                log::debug!("({}, {}) already fired", row, col);
                sink.notify(Notification::AlreadyFired { row, col });
            }
            FireResult::Miss => {
                self.shots += 1;
                log::debug!("miss at ({}, {})", row, col);
                sink.notify(Notification::Miss { row, col });
            }
            FireResult::Hit => {
                self.shots += 1;
                log::info!("hit at ({}, {})", row, col);
                sink.notify(Notification::Hit { row, col });
                // only the shot that completes the ship reports it
                if let Some(ship) = self.board.ship_at(row, col)? {
                    if ship.is_sunk() && ship.hits() == ship.size() {
                        log::info!("ship of size {} sunk", ship.size());
                        sink.notify(Notification::Sunk { size: ship.size() });
                    }
                }
            }
        }
        Ok(result)
    }

    /// Fire at a random cell, like the "Test Firing" button.
    pub fn test_fire<R: Rng>(
        &mut self,
        rng: &mut R,
        sink: &mut dyn NotificationSink,
    ) -> Result<FireResult, BoardError> {
        let (row, col) = self.board.random_coord(rng);
        log::debug!("test firing at ({}, {})", row, col);
        self.fire_at(row, col, sink)
    }

    /// Send the current grid to `sink`.
    pub fn show(&self, sink: &mut dyn NotificationSink) {
        sink.notify(Notification::Grid {
            lines: render_grid(&self.board),
        });
    }
}
