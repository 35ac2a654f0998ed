//! Renders the text buffer with the cursor cell highlighted.

use crate::engine::state::EngineState;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Draws the buffer into `area`, reversing the cell under the cursor.
///
/// Scrolls vertically so the cursor line stays visible; reads the state
/// only.
pub fn render(frame: &mut Frame, area: Rect, state: &EngineState) {
    let height = area.height as usize;
    let scroll = state.cursor.line.saturating_sub(height.max(1));

    let lines: Vec<Line> = state
        .buffer
        .iter()
        .enumerate()
        .map(|(idx, text)| {
            if idx + 1 == state.cursor.line {
                cursor_line(text, state.cursor.col)
            } else {
                Line::from(text.as_str())
            }
        })
        .collect();

    let view = Paragraph::new(lines).scroll((scroll as u16, 0));
    frame.render_widget(view, area);
}

/// Splits the cursor line into spans with the cursor cell reversed.
///
/// A cursor resting just past the last character is shown as a reversed
/// space.
fn cursor_line(text: &str, col: usize) -> Line<'_> {
    let chars: Vec<char> = text.chars().collect();
    let before: String = chars.iter().take(col - 1).collect();
    let under: String = chars
        .get(col - 1)
        .map(|c| c.to_string())
        .unwrap_or_else(|| " ".to_string());
    let after: String = chars.iter().skip(col).collect();

    Line::from(vec![
        Span::raw(before),
        Span::styled(under, Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(after),
    ])
}
