//! File loading for practice buffers.

pub mod loader;

pub use loader::{load_lines, sample_lines};
