//! Sequence matching: classifying the pending queue against the registry.
//!
//! Given the pending key queue and the binding registry, the matcher
//! produces one of three verdicts:
//!
//! - [`MatchOutcome::Full`] — some pattern sits complete at the front of the
//!   queue. First full match in registration order wins; ties between
//!   patterns sharing a prefix are resolved by that order alone.
//! - [`MatchOutcome::Partial`] — no pattern is complete, but the queue is a
//!   strict prefix of at least one pattern. The caller should suspend and
//!   wait for more input.
//! - [`MatchOutcome::NoMatch`] — the queue can never become a match no
//!   matter what keys follow.
//!
//! A leading repeat count (`3` in `3x`) is stripped before patterns are
//! compared and carried into the outcome.

use super::keys::KeyToken;
use super::registry::BindingRegistry;

/// The matcher's three-way verdict on a pending queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// No registered pattern relates to the queue.
    NoMatch,
    /// The queue is a strict prefix of at least one pattern (or a bare
    /// repeat count, which is always extendable).
    Partial,
    /// A pattern matched at the front of the queue.
    Full {
        /// Index of the winning binding, in registration order.
        index: usize,
        /// Parsed repeat count, `1` when absent.
        repeat: u32,
        /// The matched key sequence (the binding's pattern).
        keys: Vec<KeyToken>,
        /// Queue contents after the matched pattern.
        remaining: Vec<KeyToken>,
    },
}

/// Splits a leading repeat count off the queue.
///
/// A count is a run of decimal digits that does not start with `0` — a
/// leading `0` is the line-start motion, never a count. `0` may appear
/// inside a count (`10j`). Returns `(1, queue)` when no count is present.
///
/// # Examples
///
/// ```
/// use keyquest::engine::keys::tokens;
/// use keyquest::engine::matcher::split_repeat;
///
/// let queue = tokens("12x");
/// let (repeat, rest) = split_repeat(&queue);
/// assert_eq!(repeat, 12);
/// assert_eq!(rest, &tokens("x")[..]);
///
/// // Leading zero is a motion, not a count.
/// let queue = tokens("0x");
/// assert_eq!(split_repeat(&queue).0, 1);
/// ```
pub fn split_repeat(command: &[KeyToken]) -> (u32, &[KeyToken]) {
    match command.first().and_then(KeyToken::digit) {
        Some(first) if first > 0 => {
            let mut repeat = 0u32;
            let mut idx = 0;
            while let Some(digit) = command.get(idx).and_then(KeyToken::digit) {
                repeat = repeat.saturating_mul(10).saturating_add(digit);
                idx += 1;
            }
            (repeat, &command[idx..])
        }
        _ => (1, command),
    }
}

/// Classifies the pending queue against the registry.
///
/// The repeat count is stripped first; if that consumes the entire queue the
/// verdict is [`MatchOutcome::Partial`], since a bare number is a valid,
/// extendable prefix of any counted command.
pub fn match_command(registry: &BindingRegistry, command: &[KeyToken]) -> MatchOutcome {
    let (repeat, rest) = split_repeat(command);
    if rest.is_empty() {
        return MatchOutcome::Partial;
    }

    let mut saw_partial = false;
    for (index, binding) in registry.iter().enumerate() {
        let pattern = binding.pattern();
        // A zero-length pattern can never consume input.
        if pattern.is_empty() {
            continue;
        }
        if rest.len() < pattern.len() {
            if pattern.starts_with(rest) {
                saw_partial = true;
            }
        } else if rest.starts_with(pattern) {
            return MatchOutcome::Full {
                index,
                repeat,
                keys: pattern.to_vec(),
                remaining: rest[pattern.len()..].to_vec(),
            };
        }
    }

    if saw_partial {
        MatchOutcome::Partial
    } else {
        MatchOutcome::NoMatch
    }
}
