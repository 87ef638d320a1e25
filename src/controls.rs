#![cfg(feature = "std")]
//! Clickable grid: one handler per cell, each owning its coordinate.

use std::boxed::Box;
use std::collections::BTreeMap;

use crate::{
    common::{BoardError, FireResult},
    game::Game,
    ui::NotificationSink,
};

type Handler =
    Box<dyn Fn(&mut Game, &mut dyn NotificationSink) -> Result<FireResult, BoardError> + Send>;

/// Maps every `(row, col)` of a board to its click handler.
pub struct Controls {
    buttons: BTreeMap<(usize, usize), Handler>,
}

impl Controls {
    /// Create a handler for every cell of a `rows x cols` board.
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut buttons: BTreeMap<(usize, usize), Handler> = BTreeMap::new();
        for row in 0..rows {
            for col in 0..cols {
                buttons.insert(
                    (row, col),
                    Box::new(move |game: &mut Game, sink: &mut dyn NotificationSink| {
                        game.fire_at(row, col, sink)
                    }),
                );
            }
        }
        Self { buttons }
    }

    /// Controls matching the dimensions of `game`'s board.
    pub fn for_game(game: &Game) -> Self {
        Self::new(game.board().rows(), game.board().cols())
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Invoke the handler registered for (row, col).
    pub fn click(
        &self,
        row: usize,
        col: usize,
        game: &mut Game,
        sink: &mut dyn NotificationSink,
    ) -> Result<FireResult, BoardError> {
        let handler = self
            .buttons
            .get(&(row, col))
            .ok_or(BoardError::out_of_bounds(row, col))?;
        handler(game, sink)
    }
}
