#![cfg(feature = "std")]
//! Input sources and the commands they carry.

use std::collections::VecDeque;
use std::string::{String, ToString};
use std::vec::Vec;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines};

/// A user interaction, coordinates 0-indexed and possibly out of range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Fire { row: i64, col: i64 },
    TestFire,
    Show,
    Quit,
}

/// Parse one input line. Coordinates are typed 1-indexed.
///
/// Accepts `R C`, `fire R C`, `test`, `show` and `quit` (or `exit`).
pub fn parse_command(line: &str) -> Option<Command> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        ["test"] => Some(Command::TestFire),
        ["show"] => Some(Command::Show),
        ["quit"] | ["exit"] => Some(Command::Quit),
        ["fire", r, c] | [r, c] => {
            let row: i64 = r.parse().ok()?;
            let col: i64 = c.parse().ok()?;
            Some(Command::Fire {
                row: row.checked_sub(1)?,
                col: col.checked_sub(1)?,
            })
        }
        _ => None,
    }
}

/// Source of raw input lines, one user interaction each.
#[async_trait::async_trait]
pub trait InputSource: Send {
    /// Next line, or `None` once the source is exhausted.
    async fn next_line(&mut self) -> anyhow::Result<Option<String>>;
}

/// Lines read from any async reader, typically stdin.
pub struct ReaderInput<R> {
    lines: Lines<BufReader<R>>,
}

impl<R: AsyncRead + Unpin> ReaderInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
        }
    }
}

impl ReaderInput<tokio::io::Stdin> {
    pub fn stdin() -> Self {
        Self::new(tokio::io::stdin())
    }
}

#[async_trait::async_trait]
impl<R: AsyncRead + Unpin + Send> InputSource for ReaderInput<R> {
    async fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        Ok(self.lines.next_line().await?)
    }
}

/// Pre-recorded lines, handed out in order.
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            lines: lines.into_iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }
}

#[async_trait::async_trait]
impl InputSource for ScriptedInput {
    async fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
