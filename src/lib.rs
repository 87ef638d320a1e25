#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
mod cell;
mod common;
mod config;
mod ship;
#[cfg(feature = "std")]
mod controls;
#[cfg(feature = "std")]
mod game;
#[cfg(feature = "std")]
pub mod input;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
pub mod ui;

pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use controls::*;
#[cfg(feature = "std")]
pub use game::*;
#[cfg(feature = "std")]
pub use input::{parse_command, Command, InputSource, ReaderInput, ScriptedInput};
#[cfg(feature = "std")]
pub use logging::{init_logging, log_level, LOG_ENV_VAR};
#[cfg(feature = "std")]
pub use session::{Session, SessionSummary};
#[cfg(feature = "std")]
pub use ui::{JsonSink, Notification, NotificationSink, TextSink};
