//! Loading practice buffers from text files.

use anyhow::{Context, Result};
use std::path::Path;

/// Reads a text file into buffer lines.
///
/// Line endings are stripped; an empty file yields a single empty line so
/// the cursor invariants hold.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut lines: Vec<String> = contents.lines().map(|line| line.to_string()).collect();
    if lines.is_empty() {
        lines.push(String::new());
    }
    Ok(lines)
}

/// The built-in practice text used when no file is given.
pub fn sample_lines() -> Vec<String> {
    vec![
        "Welcome to keyquest.".to_string(),
        String::new(),
        "Move with h j k l (or the arrows).".to_string(),
        "Try 3x, dd, 2dd, gg, G, 0 and $.".to_string(),
        "Insert with i or a, leave with Escape.".to_string(),
        "A count multiplies: 10l, 2j, 3itap<Esc>.".to_string(),
        String::new(),
        "Ctrl-C (with nothing pending) quits.".to_string(),
    ]
}
