//! UI module for the keyquest terminal interface.
//!
//! Renders an [`EngineState`] snapshot to the terminal: the buffer with the
//! cursor cell highlighted on top, a one-row status line at the bottom. The
//! renderer only reads `buffer`, `cursor` and `command`; it never feeds
//! anything back into the engine.

pub mod buffer_view;
pub mod status_line;

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Terminal;

use crate::engine::state::EngineState;

/// Main UI structure that manages terminal rendering.
pub struct UI {
    /// Whether the status line row is drawn.
    show_status_line: bool,
}

impl UI {
    /// Creates a new UI instance.
    pub fn new(show_status_line: bool) -> Self {
        Self { show_status_line }
    }

    /// Renders the given engine snapshot to the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal drawing fails.
    pub fn render<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        state: &EngineState,
    ) -> Result<()> {
        terminal.draw(|frame| {
            if self.show_status_line {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(1), Constraint::Length(1)])
                    .split(frame.area());

                buffer_view::render(frame, chunks[0], state);
                status_line::render(frame, chunks[1], state);
            } else {
                buffer_view::render(frame, frame.area(), state);
            }
        })?;

        Ok(())
    }
}
