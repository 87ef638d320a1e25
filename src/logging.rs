#![cfg(feature = "std")]
//! Stderr logger for the demo session.
//!
//! Stdout carries only notifications (text or JSON lines), so every log
//! record goes to stderr, tagged with the module that produced it.

use std::env;
use log::{self, LevelFilter, Metadata, Record};

/// Environment variable holding the log level (`off`, `error`, ... `trace`).
pub const LOG_ENV_VAR: &str = "BATTLESHIP_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level for a raw `BATTLESHIP_LOG` value; missing or unparsable means `info`.
pub fn log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger with the level from [`LOG_ENV_VAR`].
/// Calling it again keeps the first logger.
pub fn init_logging() {
    let level = log_level(env::var(LOG_ENV_VAR).ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
