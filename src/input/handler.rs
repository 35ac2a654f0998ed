//! Input event handler for polling keyboard events.

use super::keys::map_event;
use crate::engine::keys::KeyToken;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Stdin};
use termion::input::{Events, TermRead};

/// Event source for reading terminal events.
///
/// Wraps the events iterator so its position in the input buffer is kept
/// across calls, preventing character loss during rapid input (paste).
enum EventSource {
    /// Reading from stdin
    Stdin(Events<Stdin>),
    /// Reading from /dev/tty (when stdin was piped)
    Tty(Events<File>),
}

/// Polls terminal events and decodes them into engine key tokens.
pub struct InputHandler {
    /// Event source iterator (maintains position in input buffer)
    events: EventSource,
}

impl InputHandler {
    /// Creates a new InputHandler that reads from stdin.
    pub fn new() -> Self {
        Self {
            events: EventSource::Stdin(io::stdin().events()),
        }
    }

    /// Creates a new InputHandler that reads from /dev/tty.
    /// Use this when stdin has been consumed for piped data.
    pub fn new_with_tty() -> Result<Self> {
        let tty_file = File::options()
            .read(true)
            .write(true)
            .open("/dev/tty")
            .context("Failed to open /dev/tty for keyboard input")?;

        Ok(Self {
            events: EventSource::Tty(tty_file.events()),
        })
    }

    /// Polls for the next key token.
    ///
    /// Returns `Ok(None)` when no event is pending or the event has no token
    /// representation (mouse movement, unsupported chords).
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying event stream fails.
    pub fn poll_key(&mut self) -> Result<Option<KeyToken>> {
        let event = match &mut self.events {
            EventSource::Stdin(events) => events.next(),
            EventSource::Tty(events) => events.next(),
        };

        match event {
            Some(event) => Ok(map_event(event?)),
            None => Ok(None),
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
