//! # KeyQuest - a terminal playground for vim-style key commands
//!
//! KeyQuest interprets a live stream of keypress tokens against a registry
//! of multi-key bindings, the way vim resolves sequences like `dd`, `3x` and
//! `gg`: prefix ambiguity is settled by registration order, numeric repeat
//! counts multiply the action that follows, a batch ending on an ambiguous
//! prefix suspends until more keys arrive, and Escape cancels whatever is
//! pending. Every resolved command produces a new immutable editor state.
//!
//! The crate splits into a pure core and thin boundary layers:
//!
//! - [`engine`] — key tokens, engine state, binding registry, sequence
//!   matcher, command processor, stock action handlers. No I/O.
//! - [`input`] — termion event decoding.
//! - [`ui`] — ratatui rendering of a state snapshot.
//! - [`file`] / [`config`] — practice buffer loading and TOML settings.

pub mod config;
pub mod engine;
pub mod file;
pub mod input;
pub mod ui;
