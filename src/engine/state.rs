//! Engine state: the text buffer, cursor, and pending key queue.
//!
//! [`EngineState`] is a value, not a place. Every processed key batch
//! produces a new snapshot; nothing mutates a previous one in place. The
//! renderer reads a snapshot, the command processor folds handlers over
//! snapshots, and tests compare snapshots with `==`.
//!
//! # Cursor invariants
//!
//! - `cursor.line` is always within `[1, buffer.len()]`
//! - `cursor.col` is always within `[1, line_len + 1]` — the `+ 1` lets the
//!   cursor rest just past the last character, matching editor convention
//! - the buffer always holds at least one line (possibly empty)

use super::keys::KeyToken;

/// A cursor position in the buffer, 1-based.
///
/// `col_want` records the desired column for vertical moves that cross
/// shorter lines: moving down through a short line and back onto a long one
/// returns the cursor to the column it wanted, not the column it was clamped
/// to. Only horizontal moves and explicit repositioning update it.
///
/// # Examples
///
/// ```
/// use keyquest::engine::state::CursorPos;
///
/// let cur = CursorPos::new(2, 5);
/// assert_eq!(cur.line, 2);
/// assert_eq!(cur.col, 5);
/// assert_eq!(cur.col_want, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPos {
    /// Line number, 1-based.
    pub line: usize,
    /// Column number, 1-based.
    pub col: usize,
    /// Desired column for vertical movement.
    pub col_want: usize,
}

impl CursorPos {
    /// Creates a cursor with `col_want` equal to `col`.
    pub fn new(line: usize, col: usize) -> Self {
        Self {
            line,
            col,
            col_want: col,
        }
    }
}

impl Default for CursorPos {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// An immutable snapshot of the engine: buffer, cursor, pending keys.
///
/// Created once at session start from an initial buffer; a new snapshot is
/// produced by every call to [`process`]. The `command` field holds input
/// that has been received but not yet resolved into an action — after a
/// processing step it is either empty or a genuine unresolved remainder
/// (the strict prefix of some registered pattern).
///
/// [`process`]: crate::engine::processor::process
///
/// # Examples
///
/// ```
/// use keyquest::engine::state::EngineState;
///
/// let state = EngineState::new(vec!["abc".to_string(), "def".to_string()]);
/// assert_eq!(state.cursor.line, 1);
/// assert_eq!(state.line_len(), 3);
/// assert!(state.command.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineState {
    /// The text buffer, one string per line.
    pub buffer: Vec<String>,
    /// The cursor position.
    pub cursor: CursorPos,
    /// Received but not yet resolved key tokens.
    pub command: Vec<KeyToken>,
}

impl EngineState {
    /// Creates a fresh state with the cursor at `(1, 1)` and no pending keys.
    ///
    /// An empty buffer is normalized to a single empty line so the cursor
    /// invariants hold from the start.
    pub fn new(buffer: Vec<String>) -> Self {
        let buffer = if buffer.is_empty() {
            vec![String::new()]
        } else {
            buffer
        };
        Self {
            buffer,
            cursor: CursorPos::default(),
            command: Vec::new(),
        }
    }

    /// Returns the line under the cursor.
    pub fn current_line(&self) -> &str {
        &self.buffer[self.cursor.line - 1]
    }

    /// Returns the character length of the line under the cursor.
    pub fn line_len(&self) -> usize {
        self.current_line().chars().count()
    }

    /// Returns a copy of this state with a different cursor.
    pub fn with_cursor(&self, cursor: CursorPos) -> Self {
        Self {
            cursor,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_at_origin() {
        let state = EngineState::new(vec!["hello".to_string()]);
        assert_eq!(state.cursor, CursorPos::new(1, 1));
        assert!(state.command.is_empty());
    }

    #[test]
    fn test_empty_buffer_normalized_to_one_line() {
        let state = EngineState::new(vec![]);
        assert_eq!(state.buffer, vec![String::new()]);
        assert_eq!(state.line_len(), 0);
    }

    #[test]
    fn test_line_len_counts_chars_not_bytes() {
        let state = EngineState::new(vec!["héllo".to_string()]);
        assert_eq!(state.line_len(), 5);
    }

    #[test]
    fn test_with_cursor_leaves_original_untouched() {
        let state = EngineState::new(vec!["abc".to_string()]);
        let moved = state.with_cursor(CursorPos::new(1, 3));
        assert_eq!(state.cursor.col, 1);
        assert_eq!(moved.cursor.col, 3);
        assert_eq!(moved.buffer, state.buffer);
    }

    #[test]
    fn test_col_want_tracks_col_on_new() {
        let cur = CursorPos::new(3, 7);
        assert_eq!(cur.col_want, 7);
    }
}
