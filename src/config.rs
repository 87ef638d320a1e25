use crate::ship::Orientation;

pub const BOARD_ROWS: usize = 6;
pub const BOARD_COLS: usize = 6;

/// The single ship placed at startup.
pub const DEMO_SHIP_SIZE: usize = 3;
pub const DEMO_SHIP_ROW: usize = 1;
pub const DEMO_SHIP_COL: usize = 1;
pub const DEMO_SHIP_ORIENTATION: Orientation = Orientation::Horizontal;

/// Where and how large the startup ship is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipPlacement {
    pub size: usize,
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

/// Everything needed to set up a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub ship: ShipPlacement,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: BOARD_ROWS,
            cols: BOARD_COLS,
            ship: ShipPlacement {
                size: DEMO_SHIP_SIZE,
                row: DEMO_SHIP_ROW,
                col: DEMO_SHIP_COL,
                orientation: DEMO_SHIP_ORIENTATION,
            },
        }
    }
}
