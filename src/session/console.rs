//! Console collaborators: where tokens come from and where screens go.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use tracing::warn;

use super::event::GameEvent;
use super::render::{render_screen, Snapshot, CLEAR_SCREEN};

/// Line-oriented console the session talks to.
pub trait Console {
    /// Next whitespace-delimited token, or `None` at end of input.
    fn read_token(&mut self) -> Option<String>;

    /// Redraw the screen.
    fn show(&mut self, snapshot: &Snapshot);

    /// Report an event.
    fn message(&mut self, event: &GameEvent);

    /// Final screen clear.
    fn clear_screen(&mut self);
}

/// Console over a reader and a writer (stdin/stdout in the binary).
///
/// Write failures are logged and otherwise ignored; a read failure ends
/// input.
pub struct StdConsole<R, W> {
    reader: R,
    writer: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: VecDeque::new(),
        }
    }

    /// Consume the console, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write_str(&mut self, text: &str) {
        if let Err(err) = self
            .writer
            .write_all(text.as_bytes())
            .and_then(|()| self.writer.flush())
        {
            warn!(%err, "console write failed");
        }
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn read_token(&mut self) -> Option<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }

            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => self
                    .pending
                    .extend(line.split_whitespace().map(str::to_string)),
                Err(err) => {
                    warn!(%err, "console read failed");
                    return None;
                }
            }
        }
    }

    fn show(&mut self, snapshot: &Snapshot) {
        let screen = render_screen(snapshot);
        self.write_str(&screen);
    }

    fn message(&mut self, event: &GameEvent) {
        let line = format!("{}\n", event);
        self.write_str(&line);
    }

    fn clear_screen(&mut self) {
        self.write_str(CLEAR_SCREEN);
    }
}

/// Console fed from a fixed token list that records everything shown.
#[derive(Clone, Debug, Default)]
pub struct ScriptedConsole {
    tokens: VecDeque<String>,
    /// Every snapshot shown, in order.
    pub screens: Vec<Snapshot>,
    /// Every event reported, in order.
    pub messages: Vec<GameEvent>,
    /// Number of final screen clears.
    pub clears: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Tokens not yet read.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

impl Console for ScriptedConsole {
    fn read_token(&mut self) -> Option<String> {
        self.tokens.pop_front()
    }

    fn show(&mut self, snapshot: &Snapshot) {
        self.screens.push(snapshot.clone());
    }

    fn message(&mut self, event: &GameEvent) {
        self.messages.push(event.clone());
    }

    fn clear_screen(&mut self) {
        self.clears += 1;
    }
}
