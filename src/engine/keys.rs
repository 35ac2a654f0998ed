//! Key tokens: the atomic input units the engine consumes.
//!
//! A [`KeyToken`] is one unit of decoded keyboard input — a printable
//! character or a named special key. Tokens are plain values: cheap to copy,
//! comparable, hashable. The engine never sees raw terminal bytes; the input
//! layer decodes them into tokens before feeding [`process`].
//!
//! [`process`]: crate::engine::processor::process

use std::fmt;

/// One atomic unit of keyboard input.
///
/// Printable keys carry their character; everything else the engine cares
/// about gets a named variant. `Null` is a no-op sentinel some input layers
/// emit when normalizing events; the command processor drops it on sight.
///
/// # Examples
///
/// ```
/// use keyquest::engine::keys::KeyToken;
///
/// let key = KeyToken::Char('d');
/// assert!(!key.is_digit());
/// assert_eq!(KeyToken::Char('7').digit(), Some(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyToken {
    /// A printable character.
    Char(char),
    /// The Escape key.
    Esc,
    /// Ctrl-C.
    CtrlC,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Backspace.
    Backspace,
    /// Enter / Return.
    Enter,
    /// No-op sentinel from upstream input normalization.
    Null,
}

impl KeyToken {
    /// Returns true if this token is a decimal digit character.
    pub fn is_digit(&self) -> bool {
        matches!(self, KeyToken::Char(c) if c.is_ascii_digit())
    }

    /// Returns the digit value for `Char('0')..Char('9')`, `None` otherwise.
    pub fn digit(&self) -> Option<u32> {
        match self {
            KeyToken::Char(c) => c.to_digit(10),
            _ => None,
        }
    }

    /// Returns true for the tokens that cancel a pending sequence.
    pub fn is_cancel(&self) -> bool {
        matches!(self, KeyToken::Esc | KeyToken::CtrlC)
    }
}

impl fmt::Display for KeyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyToken::Char(c) => write!(f, "{}", c),
            KeyToken::Esc => write!(f, "<Esc>"),
            KeyToken::CtrlC => write!(f, "<C-c>"),
            KeyToken::Up => write!(f, "<Up>"),
            KeyToken::Down => write!(f, "<Down>"),
            KeyToken::Left => write!(f, "<Left>"),
            KeyToken::Right => write!(f, "<Right>"),
            KeyToken::Backspace => write!(f, "<BS>"),
            KeyToken::Enter => write!(f, "<CR>"),
            KeyToken::Null => write!(f, "<Nul>"),
        }
    }
}

/// Converts a plain string into a token sequence, one token per character.
///
/// Convenience for registering patterns and writing tests; special keys have
/// no string form and must be appended as enum values.
///
/// # Examples
///
/// ```
/// use keyquest::engine::keys::{tokens, KeyToken};
///
/// assert_eq!(tokens("dd"), vec![KeyToken::Char('d'), KeyToken::Char('d')]);
/// ```
pub fn tokens(s: &str) -> Vec<KeyToken> {
    s.chars().map(KeyToken::Char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_classification() {
        assert!(KeyToken::Char('0').is_digit());
        assert!(KeyToken::Char('9').is_digit());
        assert!(!KeyToken::Char('d').is_digit());
        assert!(!KeyToken::Esc.is_digit());
        assert_eq!(KeyToken::Char('3').digit(), Some(3));
        assert_eq!(KeyToken::Up.digit(), None);
    }

    #[test]
    fn test_cancel_tokens() {
        assert!(KeyToken::Esc.is_cancel());
        assert!(KeyToken::CtrlC.is_cancel());
        assert!(!KeyToken::Char('q').is_cancel());
    }

    #[test]
    fn test_tokens_helper() {
        assert_eq!(
            tokens("3x"),
            vec![KeyToken::Char('3'), KeyToken::Char('x')]
        );
        assert!(tokens("").is_empty());
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(KeyToken::Char('g').to_string(), "g");
        assert_eq!(KeyToken::Esc.to_string(), "<Esc>");
        assert_eq!(KeyToken::Enter.to_string(), "<CR>");
    }
}
