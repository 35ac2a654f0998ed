//! Error types for binding registration and action execution.

use std::fmt;

use super::keys::KeyToken;

/// Returned by [`BindingRegistry::register`] when an identical pattern is
/// already registered.
///
/// Registration happens once at startup, so this is a setup-time failure to
/// be fixed by the binding author, not something to recover from at runtime.
///
/// [`BindingRegistry::register`]: crate::engine::registry::BindingRegistry::register
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicatePatternError {
    /// The pattern that was registered twice.
    pub pattern: Vec<KeyToken>,
}

impl fmt::Display for DuplicatePatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pattern '")?;
        for key in &self.pattern {
            write!(f, "{}", key)?;
        }
        write!(f, "' is already registered")
    }
}

impl std::error::Error for DuplicatePatternError {}

/// Raised by an action handler when a fully-matched command cannot be
/// legally applied to the current state (deleting past the end of the
/// buffer, for example).
///
/// The command processor recovers locally: the state from before the handler
/// ran is kept and the pending queue is dropped — the silent no-op "bell".
/// Callers of [`process`] never see this error.
///
/// [`process`]: crate::engine::processor::process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionNotPossible;

impl fmt::Display for ActionNotPossible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "action not possible in the current state")
    }
}

impl std::error::Error for ActionNotPossible {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::keys::tokens;

    #[test]
    fn test_duplicate_pattern_display() {
        let err = DuplicatePatternError {
            pattern: tokens("dd"),
        };
        assert_eq!(err.to_string(), "pattern 'dd' is already registered");
    }

    #[test]
    fn test_duplicate_pattern_display_special_keys() {
        let err = DuplicatePatternError {
            pattern: vec![KeyToken::Esc],
        };
        assert_eq!(err.to_string(), "pattern '<Esc>' is already registered");
    }

    #[test]
    fn test_action_not_possible_display() {
        assert_eq!(
            ActionNotPossible.to_string(),
            "action not possible in the current state"
        );
    }
}
