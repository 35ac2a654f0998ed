//! The keystroke command-matching engine.
//!
//! This is the core of keyquest: a live stream of [`KeyToken`]s is matched
//! against an ordered registry of multi-key bindings (`dd`, `gg`, `3x`),
//! resolving prefix ambiguity by registration order, parsing numeric repeat
//! counts, suspending on partial matches across input batches, and folding
//! each resolved action into a new immutable [`EngineState`].
//!
//! The engine is single-threaded, synchronous and free of I/O; the input
//! and ui layers sit at its boundary.

pub mod actions;
pub mod error;
pub mod keys;
pub mod matcher;
pub mod processor;
pub mod registry;
pub mod state;

pub use actions::default_registry;
pub use error::{ActionNotPossible, DuplicatePatternError};
pub use keys::{tokens, KeyToken};
pub use matcher::MatchOutcome;
pub use processor::process;
pub use registry::{Action, Binding, BindingRegistry, KeyPressEvent};
pub use state::{CursorPos, EngineState};
