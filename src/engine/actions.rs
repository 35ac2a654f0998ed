//! Stock vim-like action handlers and the default binding registry.
//!
//! Each handler is a pure function from `(event, state)` to a new state,
//! honoring the cursor invariants and returning [`ActionNotPossible`] when a
//! fully-matched command cannot legally apply. Repeat counts multiply
//! through every handler (`3x`, `2dd`, `2l`).

use super::error::{ActionNotPossible, DuplicatePatternError};
use super::keys::{tokens, KeyToken};
use super::registry::{BindingRegistry, KeyPressEvent};
use super::state::EngineState;

/// Byte offset of the 1-based character column `col` in `line`.
fn byte_at(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col - 1)
        .map(|(idx, _)| idx)
        .unwrap_or(line.len())
}

fn move_left(event: &KeyPressEvent, mut state: EngineState) -> Result<EngineState, ActionNotPossible> {
    let step = event.repeat as usize;
    state.cursor.col = state.cursor.col.saturating_sub(step).max(1);
    state.cursor.col_want = state.cursor.col;
    Ok(state)
}

fn move_right(event: &KeyPressEvent, mut state: EngineState) -> Result<EngineState, ActionNotPossible> {
    let step = event.repeat as usize;
    let limit = state.line_len() + 1;
    state.cursor.col = (state.cursor.col + step).min(limit);
    state.cursor.col_want = state.cursor.col;
    Ok(state)
}

/// Clamps the column on the cursor's current line to `col_want`.
fn settle_column(state: &mut EngineState) {
    state.cursor.col = state.cursor.col_want.min(state.line_len() + 1).max(1);
}

fn move_down(event: &KeyPressEvent, mut state: EngineState) -> Result<EngineState, ActionNotPossible> {
    let step = event.repeat as usize;
    state.cursor.line = (state.cursor.line + step).min(state.buffer.len());
    settle_column(&mut state);
    Ok(state)
}

fn move_up(event: &KeyPressEvent, mut state: EngineState) -> Result<EngineState, ActionNotPossible> {
    let step = event.repeat as usize;
    state.cursor.line = state.cursor.line.saturating_sub(step).max(1);
    settle_column(&mut state);
    Ok(state)
}

fn line_start(_event: &KeyPressEvent, mut state: EngineState) -> Result<EngineState, ActionNotPossible> {
    state.cursor.col = 1;
    state.cursor.col_want = 1;
    Ok(state)
}

fn line_end(_event: &KeyPressEvent, mut state: EngineState) -> Result<EngineState, ActionNotPossible> {
    state.cursor.col = state.line_len().max(1);
    state.cursor.col_want = state.cursor.col;
    Ok(state)
}

fn goto_top(_event: &KeyPressEvent, mut state: EngineState) -> Result<EngineState, ActionNotPossible> {
    state.cursor.line = 1;
    settle_column(&mut state);
    Ok(state)
}

fn goto_bottom(_event: &KeyPressEvent, mut state: EngineState) -> Result<EngineState, ActionNotPossible> {
    state.cursor.line = state.buffer.len();
    settle_column(&mut state);
    Ok(state)
}

/// `x`: delete `repeat` characters under the cursor, as many as the line
/// holds. Fails when the cursor rests past the last character.
fn delete_chars(event: &KeyPressEvent, mut state: EngineState) -> Result<EngineState, ActionNotPossible> {
    let len = state.line_len();
    if state.cursor.col > len {
        return Err(ActionNotPossible);
    }
    let available = len - state.cursor.col + 1;
    let count = (event.repeat as usize).min(available);

    let col = state.cursor.col;
    let line = &mut state.buffer[state.cursor.line - 1];
    let byte = byte_at(line, col);
    for _ in 0..count {
        line.remove(byte);
    }

    let new_len = state.line_len();
    state.cursor.col = state.cursor.col.min(new_len.max(1));
    state.cursor.col_want = state.cursor.col;
    Ok(state)
}

/// `dd`: delete `repeat` lines starting at the cursor line. The buffer
/// never drops below one (possibly empty) line.
fn delete_lines(event: &KeyPressEvent, mut state: EngineState) -> Result<EngineState, ActionNotPossible> {
    let start = state.cursor.line - 1;
    let available = state.buffer.len() - start;
    let count = (event.repeat as usize).min(available);
    state.buffer.drain(start..start + count);

    if state.buffer.is_empty() {
        state.buffer.push(String::new());
    }
    state.cursor.line = state.cursor.line.min(state.buffer.len());
    state.cursor.col = 1;
    state.cursor.col_want = 1;
    Ok(state)
}

/// Applies one typed token during an insert.
fn apply_insert_token(state: &mut EngineState, token: KeyToken) {
    match token {
        KeyToken::Char(c) => {
            let col = state.cursor.col;
            let line = &mut state.buffer[state.cursor.line - 1];
            let byte = byte_at(line, col);
            line.insert(byte, c);
            state.cursor.col += 1;
        }
        KeyToken::Enter => {
            let col = state.cursor.col;
            let line = &mut state.buffer[state.cursor.line - 1];
            let byte = byte_at(line, col);
            let rest = line.split_off(byte);
            state.buffer.insert(state.cursor.line, rest);
            state.cursor.line += 1;
            state.cursor.col = 1;
        }
        KeyToken::Backspace => {
            if state.cursor.col > 1 {
                state.cursor.col -= 1;
                let col = state.cursor.col;
                let line = &mut state.buffer[state.cursor.line - 1];
                let byte = byte_at(line, col);
                line.remove(byte);
            } else if state.cursor.line > 1 {
                let tail = state.buffer.remove(state.cursor.line - 1);
                state.cursor.line -= 1;
                let line = &mut state.buffer[state.cursor.line - 1];
                state.cursor.col = line.chars().count() + 1;
                line.push_str(&tail);
            }
        }
        _ => {}
    }
}

/// `i` / `a`: insert text before / after the cursor.
///
/// Drains the pending queue up to the terminating Escape/Ctrl-C, replays the
/// typed sequence `repeat` times, then steps the cursor back one column
/// (vim's end-of-insert adjustment). If the batch ends before Escape
/// arrives, the text typed so far is kept and the insert ends with the
/// batch.
fn insert_text(
    event: &KeyPressEvent,
    mut state: EngineState,
    advance: bool,
) -> Result<EngineState, ActionNotPossible> {
    let mut typed = Vec::new();
    let mut consumed = 0;
    for token in &state.command {
        consumed += 1;
        if token.is_cancel() {
            break;
        }
        typed.push(*token);
    }
    state.command.drain(..consumed);

    if advance {
        state.cursor.col = (state.cursor.col + 1).min(state.line_len() + 1);
    }
    for _ in 0..event.repeat {
        for token in &typed {
            apply_insert_token(&mut state, *token);
        }
    }
    state.cursor.col = state.cursor.col.saturating_sub(1).max(1);
    state.cursor.col_want = state.cursor.col;
    Ok(state)
}

fn insert_before(event: &KeyPressEvent, state: EngineState) -> Result<EngineState, ActionNotPossible> {
    insert_text(event, state, false)
}

fn insert_after(event: &KeyPressEvent, state: EngineState) -> Result<EngineState, ActionNotPossible> {
    insert_text(event, state, true)
}

/// Builds the stock registry: vim-like movement, deletion and insert
/// bindings. Multi-key patterns are registered before single keys that
/// share their prefix, per the registry's authoring contract.
///
/// `arrow_keys` controls whether the arrow-key aliases for `hjkl` are
/// registered.
///
/// # Errors
///
/// Returns [`DuplicatePatternError`] if the stock table itself contains a
/// duplicate, which would be a bug in this module.
pub fn default_registry(arrow_keys: bool) -> Result<BindingRegistry, DuplicatePatternError> {
    let mut registry = BindingRegistry::new();

    registry.register(tokens("dd"), Box::new(delete_lines))?;
    registry.register(tokens("gg"), Box::new(goto_top))?;
    registry.register(tokens("G"), Box::new(goto_bottom))?;
    registry.register(tokens("x"), Box::new(delete_chars))?;
    registry.register(tokens("0"), Box::new(line_start))?;
    registry.register(tokens("$"), Box::new(line_end))?;
    registry.register(tokens("h"), Box::new(move_left))?;
    registry.register(tokens("j"), Box::new(move_down))?;
    registry.register(tokens("k"), Box::new(move_up))?;
    registry.register(tokens("l"), Box::new(move_right))?;
    registry.register(tokens("i"), Box::new(insert_before))?;
    registry.register(tokens("a"), Box::new(insert_after))?;

    if arrow_keys {
        registry.register(vec![KeyToken::Left], Box::new(move_left))?;
        registry.register(vec![KeyToken::Down], Box::new(move_down))?;
        registry.register(vec![KeyToken::Up], Box::new(move_up))?;
        registry.register(vec![KeyToken::Right], Box::new(move_right))?;
    }

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::processor::process;

    fn state(lines: &[&str]) -> EngineState {
        EngineState::new(lines.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_default_registry_builds() {
        assert!(!default_registry(true).unwrap().is_empty());
        let without_arrows = default_registry(false).unwrap();
        let with_arrows = default_registry(true).unwrap();
        assert_eq!(with_arrows.len(), without_arrows.len() + 4);
    }

    #[test]
    fn test_move_right_clamps_past_line_end() {
        let reg = default_registry(false).unwrap();
        let s = process(&reg, state(&["abc"]), &tokens("9l"));
        // Clamped to len + 1: resting just past the last character.
        assert_eq!(s.cursor.col, 4);
    }

    #[test]
    fn test_move_left_clamps_at_one() {
        let reg = default_registry(false).unwrap();
        let s = process(&reg, state(&["abc"]), &tokens("h"));
        assert_eq!(s.cursor.col, 1);
    }

    #[test]
    fn test_col_want_preserved_across_short_line() {
        let reg = default_registry(false).unwrap();
        // Move to the end of a long line, hop over a short one, land back.
        let s = process(&reg, state(&["abcdef", "x", "uvwxyz"]), &tokens("$jj"));
        assert_eq!(s.cursor.col, 6);

        // On the short middle line the column was clamped but col_want kept.
        let s = process(&reg, state(&["abcdef", "x", "uvwxyz"]), &tokens("$j"));
        assert_eq!(s.cursor.col, 2);
        assert_eq!(s.cursor.col_want, 6);
    }

    #[test]
    fn test_delete_char_and_cursor_clamp() {
        let reg = default_registry(false).unwrap();
        let s = process(&reg, state(&["ab"]), &tokens("$x"));
        assert_eq!(s.buffer, vec!["a"]);
        assert_eq!(s.cursor.col, 1);
    }

    #[test]
    fn test_delete_chars_capped_at_line_end() {
        let reg = default_registry(false).unwrap();
        let s = process(&reg, state(&["abc"]), &tokens("9x"));
        assert_eq!(s.buffer, vec![""]);
    }

    #[test]
    fn test_delete_char_on_empty_line_not_possible() {
        let reg = default_registry(false).unwrap();
        let before = state(&[""]);
        let s = process(&reg, before.clone(), &tokens("x"));
        assert_eq!(s.buffer, before.buffer);
        assert_eq!(s.cursor, before.cursor);
    }

    #[test]
    fn test_delete_lines() {
        let reg = default_registry(false).unwrap();
        let s = process(&reg, state(&["abc", "def", "ghi"]), &tokens("dd"));
        assert_eq!(s.buffer, vec!["def", "ghi"]);
        assert_eq!(s.cursor.line, 1);

        let s = process(&reg, state(&["abc", "def", "ghi"]), &tokens("2dd"));
        assert_eq!(s.buffer, vec!["ghi"]);
    }

    #[test]
    fn test_delete_last_line_leaves_empty_buffer_line() {
        let reg = default_registry(false).unwrap();
        let s = process(&reg, state(&["only"]), &tokens("dd"));
        assert_eq!(s.buffer, vec![""]);
        assert_eq!(s.cursor.line, 1);
        assert_eq!(s.cursor.col, 1);
    }

    #[test]
    fn test_goto_top_and_bottom() {
        let reg = default_registry(false).unwrap();
        let s = process(&reg, state(&["a", "b", "c"]), &tokens("G"));
        assert_eq!(s.cursor.line, 3);
        let s = process(&reg, s, &tokens("gg"));
        assert_eq!(s.cursor.line, 1);
    }

    #[test]
    fn test_insert_before_cursor() {
        let reg = default_registry(false).unwrap();
        let mut keys = tokens("ito");
        keys.push(KeyToken::Esc);
        let s = process(&reg, state(&["abc"]), &keys);
        assert_eq!(s.buffer, vec!["toabc"]);
        // End-of-insert adjustment: cursor on the last typed character.
        assert_eq!(s.cursor.col, 2);
    }

    #[test]
    fn test_append_after_cursor() {
        let reg = default_registry(false).unwrap();
        let mut keys = tokens("aX");
        keys.push(KeyToken::Esc);
        let s = process(&reg, state(&["abc"]), &keys);
        assert_eq!(s.buffer, vec!["aXbc"]);
    }

    #[test]
    fn test_insert_repeat_replays_typed_text() {
        let reg = default_registry(false).unwrap();
        let mut keys = tokens("3iab");
        keys.push(KeyToken::Esc);
        let s = process(&reg, state(&[""]), &keys);
        assert_eq!(s.buffer, vec!["ababab"]);
    }

    #[test]
    fn test_insert_enter_splits_line() {
        let reg = default_registry(false).unwrap();
        let keys = vec![
            KeyToken::Char('l'),
            KeyToken::Char('i'),
            KeyToken::Enter,
            KeyToken::Esc,
        ];
        let s = process(&reg, state(&["ab"]), &keys);
        assert_eq!(s.buffer, vec!["a", "b"]);
        assert_eq!(s.cursor.line, 2);
    }

    #[test]
    fn test_insert_backspace_eats_typed_char() {
        let reg = default_registry(false).unwrap();
        let keys = vec![
            KeyToken::Char('i'),
            KeyToken::Char('x'),
            KeyToken::Char('y'),
            KeyToken::Backspace,
            KeyToken::Esc,
        ];
        let s = process(&reg, state(&["ab"]), &keys);
        assert_eq!(s.buffer, vec!["xab"]);
    }

    #[test]
    fn test_insert_without_escape_keeps_text() {
        let reg = default_registry(false).unwrap();
        let s = process(&reg, state(&[""]), &tokens("ihello"));
        assert_eq!(s.buffer, vec!["hello"]);
        assert!(s.command.is_empty());
    }

    #[test]
    fn test_count_then_motion_then_insert_chain() {
        let reg = default_registry(false).unwrap();
        let mut keys = tokens("2litoto");
        keys.push(KeyToken::Esc);
        let s = process(&reg, state(&["abcd"]), &keys);
        assert_eq!(s.buffer, vec!["abtotocd"]);
    }
}
