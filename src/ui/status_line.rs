//! The status line: cursor position and pending key echo.

use crate::engine::state::EngineState;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Draws the status line: `line:col` on the left, the pending queue echoed
/// on the right like vim's `showcmd`.
pub fn render(frame: &mut Frame, area: Rect, state: &EngineState) {
    let position = format!("{}:{}", state.cursor.line, state.cursor.col);
    let pending = pending_text(state);

    let width = area.width as usize;
    let gap = width
        .saturating_sub(position.len())
        .saturating_sub(pending.len());

    let line = Line::from(vec![
        Span::styled(position, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(gap)),
        Span::raw(pending),
    ]);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().add_modifier(Modifier::REVERSED)),
        area,
    );
}

fn pending_text(state: &EngineState) -> String {
    state
        .command
        .iter()
        .map(|key| key.to_string())
        .collect::<String>()
}
