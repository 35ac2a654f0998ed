//! The command processor: resolving a key queue into executed actions.
//!
//! [`process`] appends a batch of input tokens to the state's pending queue
//! and then runs the match/dispatch loop to a fixed point. One call can
//! consume several chained commands fed in a single batch (`2l` then
//! `itoto<Esc>`), and it suspends cleanly when a batch ends on an ambiguous
//! prefix — suspension is an ordinary return, never a blocking wait or an
//! error.
//!
//! The core is fully synchronous and does no I/O; the caller (terminal
//! front end, test harness) decides when to supply more tokens.

use super::keys::KeyToken;
use super::matcher::{match_command, MatchOutcome};
use super::registry::{BindingRegistry, KeyPressEvent};
use super::state::EngineState;

/// Appends `input` to the pending queue and processes it to a fixed point.
///
/// The loop terminates in one of three ways:
///
/// - the queue is empty — every pending command was resolved and executed;
/// - the queue holds a partial match — the state is returned with the queue
///   retained so the next batch can extend it;
/// - the queue cannot lead anywhere — it is discarded, silently. This also
///   covers a trailing Escape/Ctrl-C, which cancels whatever was pending.
///
/// A handler signalling that its action is not possible is swallowed here:
/// the state from before the handler is kept, the queue is dropped, and the
/// call returns — the equivalent of vim's bell plus typeahead flush.
///
/// # Examples
///
/// ```
/// use keyquest::engine::actions::default_registry;
/// use keyquest::engine::keys::tokens;
/// use keyquest::engine::processor::process;
/// use keyquest::engine::state::EngineState;
///
/// let registry = default_registry(true).unwrap();
/// let state = EngineState::new(vec!["abc".to_string(), "def".to_string()]);
///
/// let state = process(&registry, state, &tokens("l"));
/// assert_eq!((state.cursor.line, state.cursor.col), (1, 2));
/// ```
pub fn process(
    registry: &BindingRegistry,
    mut state: EngineState,
    input: &[KeyToken],
) -> EngineState {
    state.command.extend_from_slice(input);

    loop {
        if state.command.is_empty() {
            return state;
        }
        // Upstream input normalization can hand us an empty key.
        if state.command[0] == KeyToken::Null {
            state.command.remove(0);
            continue;
        }

        match match_command(registry, &state.command) {
            MatchOutcome::Partial => {
                // Suspended: the queue is a genuine unresolved remainder.
                return state;
            }
            MatchOutcome::NoMatch => {
                // Nothing this queue could ever resolve to. A trailing
                // Escape/Ctrl-C cancels the pending sequence; an
                // unrecognized sequence is discarded just the same.
                state.command.clear();
                return state;
            }
            MatchOutcome::Full {
                index,
                repeat,
                keys,
                remaining,
            } => {
                let event = KeyPressEvent { repeat, keys };
                let mut next = state.clone();
                next.command = remaining;

                let Some(binding) = registry.get(index) else {
                    state.command.clear();
                    return state;
                };
                match binding.invoke(&event, next) {
                    Ok(resolved) => state = resolved,
                    Err(_) => {
                        state.command.clear();
                        return state;
                    }
                }
            }
        }
    }
}
