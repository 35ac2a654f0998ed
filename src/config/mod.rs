//! Configuration system for keyquest.
//!
//! Settings load from a TOML file and fall back to sensible defaults when
//! the file is missing or malformed. Configuration only shapes the boundary
//! layers (which bindings are registered, what is drawn); the engine core
//! takes no configuration at all.
//!
//! # Example
//!
//! ```
//! use keyquest::config::Config;
//!
//! let config = Config::default();
//! assert!(config.show_status_line);
//! assert!(config.arrow_keys);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for the keyquest application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Draw the status line (cursor position, pending key echo)
    #[serde(default = "default_show_status_line")]
    pub show_status_line: bool,

    /// Register the arrow-key aliases for hjkl
    #[serde(default = "default_arrow_keys")]
    pub arrow_keys: bool,
}

/// Returns the default for drawing the status line.
fn default_show_status_line() -> bool {
    true
}

/// Returns the default for registering arrow-key bindings.
fn default_arrow_keys() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_status_line: default_show_status_line(),
            arrow_keys: default_arrow_keys(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/keyquest/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("keyquest");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't
    /// be read.
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Self::default(),
        };
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path, falling back to defaults.
    pub fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|_| Self::default()),
            Err(_) => Self::default(),
        }
    }

    /// Saves configuration to the given path, creating parent directories.
    pub fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}
