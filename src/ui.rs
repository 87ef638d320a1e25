#![cfg(feature = "std")]
//! Notifications and rendering for the presentation layer.

use std::fmt;
use std::io::Write;
use std::string::String;
use std::vec::Vec;

use serde::Serialize;

use crate::board::Board;
use crate::cell::CellState;

/// A message the game reports to whoever is displaying it.
///
/// Coordinates are 0-indexed; [`fmt::Display`] shows them 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Notification {
    Hit { row: usize, col: usize },
    Miss { row: usize, col: usize },
    AlreadyFired { row: usize, col: usize },
    Sunk { size: usize },
    OutOfBounds { row: i64, col: i64 },
    Grid { lines: Vec<String> },
    Invalid { input: String },
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::Hit { row, col } => write!(f, "Hit at {}, {}!", row + 1, col + 1),
            Notification::Miss { row, col } => write!(f, "Miss at {}, {}!", row + 1, col + 1),
            Notification::AlreadyFired { .. } => write!(f, "Already fired at this cell!"),
            Notification::Sunk { size } => write!(f, "Ship of size {} sunk!", size),
            Notification::OutOfBounds { row, col } => {
                write!(
                    f,
                    "Out of bounds: {}, {}",
                    row.saturating_add(1),
                    col.saturating_add(1)
                )
            }
            Notification::Grid { lines } => write!(f, "{}", lines.join("\n")),
            Notification::Invalid { input } => write!(f, "Unrecognized command: {}", input),
        }
    }
}

/// Receives notifications. The game never prints on its own.
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

/// Collecting sink, mostly for tests.
impl NotificationSink for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

/// Writes each notification as a line of human-readable text.
pub struct TextSink<W: Write> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> NotificationSink for TextSink<W> {
    fn notify(&mut self, notification: Notification) {
        if let Err(e) = writeln!(self.out, "{}", notification) {
            log::error!("failed to write notification: {}", e);
        }
    }
}

/// Writes each notification as one JSON object per line.
pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> NotificationSink for JsonSink<W> {
    fn notify(&mut self, notification: Notification) {
        let written = serde_json::to_string(&notification)
            .map_err(std::io::Error::from)
            .and_then(|line| writeln!(self.out, "{}", line));
        if let Err(e) = written {
            log::error!("failed to write notification: {}", e);
        }
    }
}

/// Marker drawn for a cell: blank, hit or miss.
pub fn cell_marker(state: CellState) -> char {
    match state {
        CellState::Unfired => '.',
        CellState::Hit => 'O',
        CellState::Miss => 'X',
    }
}

/// Render the board as text lines with 1-indexed headings. Ships stay hidden.
pub fn render_grid(board: &Board) -> Vec<String> {
    let mut lines = Vec::with_capacity(board.rows() + 1);
    let mut header = String::from("   ");
    for c in 0..board.cols() {
        header.push_str(&std::format!(" {:>2}", c + 1));
    }
    lines.push(header);

    let mut line = String::new();
    for (r, c, cell) in board.cells() {
        if c == 0 {
            line = std::format!("{:2} ", r + 1);
        }
        line.push_str(&std::format!("  {}", cell_marker(cell.state())));
        if c + 1 == board.cols() {
            lines.push(std::mem::take(&mut line));
        }
    }
    lines
}
