//! The binding registry: ordered key-sequence patterns bound to actions.
//!
//! A [`BindingRegistry`] is built once at startup and read-only afterward.
//! Registration order matters: the sequence matcher walks bindings in the
//! order they were registered and the first full match wins. Register
//! longer, more specific patterns before shorter ones that share a prefix —
//! registering `d` before `dd` would shadow `dd` forever. That ordering is
//! an authoring contract, not something the registry enforces.

use super::error::{ActionNotPossible, DuplicatePatternError};
use super::keys::KeyToken;
use super::state::EngineState;
use std::fmt;

/// The value passed to an action handler when its pattern fully matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPressEvent {
    /// Parsed repeat count (`3` in `3x`), `1` when absent.
    pub repeat: u32,
    /// The matched key sequence, count digits excluded.
    pub keys: Vec<KeyToken>,
}

/// An action handler bound to a key-sequence pattern.
///
/// Handlers receive the match event and a state whose pending queue already
/// has the matched prefix removed, and return the next state. A handler may
/// consume further tokens from `state.command` (insert does this to drain
/// typed text up to the closing Escape). A handler that cannot legally apply
/// in the current state returns [`ActionNotPossible`].
pub type Action = Box<dyn Fn(&KeyPressEvent, EngineState) -> Result<EngineState, ActionNotPossible>>;

/// A registered (pattern, handler) pair.
pub struct Binding {
    pattern: Vec<KeyToken>,
    action: Action,
}

impl Binding {
    /// The exact key sequence this binding requires.
    pub fn pattern(&self) -> &[KeyToken] {
        &self.pattern
    }

    /// Invokes the bound handler.
    pub fn invoke(
        &self,
        event: &KeyPressEvent,
        state: EngineState,
    ) -> Result<EngineState, ActionNotPossible> {
        (self.action)(event, state)
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

/// An ordered, write-once collection of bindings.
///
/// # Examples
///
/// ```
/// use keyquest::engine::keys::tokens;
/// use keyquest::engine::registry::BindingRegistry;
///
/// let mut registry = BindingRegistry::new();
/// registry
///     .register(tokens("dd"), Box::new(|_event, state| Ok(state)))
///     .unwrap();
///
/// // Registering the same pattern again is an author mistake.
/// let err = registry.register(tokens("dd"), Box::new(|_event, state| Ok(state)));
/// assert!(err.is_err());
/// ```
#[derive(Debug, Default)]
pub struct BindingRegistry {
    bindings: Vec<Binding>,
}

impl BindingRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Registers `action` under the exact key sequence `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicatePatternError`] if an identical pattern is already
    /// registered. Silently overwriting would hide author mistakes.
    pub fn register(
        &mut self,
        pattern: Vec<KeyToken>,
        action: Action,
    ) -> Result<(), DuplicatePatternError> {
        if self.bindings.iter().any(|b| b.pattern == pattern) {
            return Err(DuplicatePatternError { pattern });
        }
        self.bindings.push(Binding { pattern, action });
        Ok(())
    }

    /// Iterates bindings in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }

    /// Returns the binding at `index` in registration order.
    pub fn get(&self, index: usize) -> Option<&Binding> {
        self.bindings.get(index)
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
