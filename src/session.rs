#![cfg(feature = "std")]
//! Event loop driving a [`Game`] from an [`InputSource`].

use rand::rngs::SmallRng;

use crate::{
    common::BoardError,
    controls::Controls,
    game::Game,
    input::{parse_command, Command, InputSource},
    ui::{Notification, NotificationSink},
};

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Input lines handled, including rejected ones.
    pub commands: usize,
    /// Shots that changed a cell.
    pub shots: usize,
}

/// Ties together the game, its per-cell controls and the output sink.
pub struct Session<S: NotificationSink> {
    game: Game,
    controls: Controls,
    sink: S,
    rng: SmallRng,
}

impl<S: NotificationSink> Session<S> {
    pub fn new(game: Game, sink: S, rng: SmallRng) -> Self {
        let controls = Controls::for_game(&game);
        Self {
            game,
            controls,
            sink,
            rng,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Handle one command. Returns `false` when the session should stop.
    pub fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::Fire { row, col } => {
                let located = self.game.board().locate(row, col);
                let fired = located.and_then(|(r, c)| {
                    self.controls.click(r, c, &mut self.game, &mut self.sink)
                });
                if let Err(e) = fired {
                    self.report(e);
                }
            }
            Command::TestFire => {
                if let Err(e) = self.game.test_fire(&mut self.rng, &mut self.sink) {
                    self.report(e);
                }
            }
            Command::Show => self.game.show(&mut self.sink),
            Command::Quit => return false,
        }
        true
    }

    fn report(&mut self, err: BoardError) {
        log::warn!("rejected shot: {}", err);
        if let BoardError::OutOfBounds { row, col } = err {
            self.sink.notify(Notification::OutOfBounds { row, col });
        }
    }

    /// Read and handle lines until `quit` or the input runs dry.
    pub async fn run(&mut self, input: &mut dyn InputSource) -> anyhow::Result<SessionSummary> {
        let mut commands = 0;
        while let Some(line) = input.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            commands += 1;
            match parse_command(line) {
                Some(command) => {
                    if !self.handle(command) {
                        log::debug!("quit requested");
                        break;
                    }
                }
                None => {
                    log::warn!("unrecognized input {:?}", line);
                    self.sink.notify(Notification::Invalid {
                        input: line.into(),
                    });
                }
            }
        }
        Ok(SessionSummary {
            commands,
            shots: self.game.shots(),
        })
    }
}
