//! config
//!
//! Presentation defaults from an optional user-scope TOML file.
//!
//! # Precedence
//!
//! Values are resolved in this order (later overrides earlier):
//! 1. Built-in defaults (table format, auto color)
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Locations
//!
//! Searched in order:
//! 1. `--config <path>` flag (must exist and parse)
//! 2. `$GIT_BR_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/git-br/config.toml`
//! 4. `~/.config/git-br/config.toml` (via the platform config dir)
//!
//! A missing file at the searched locations is not an error; an unreadable or
//! invalid file is. Unknown keys are rejected so typos fail loudly. The
//! config never affects the core transform, only which presentation mode and
//! color choice the caller applies.
//!
//! # Example
//!
//! ```toml
//! # git-br config: presentation defaults only
//! format = "table"   # "table" | "short" | "json"
//! color  = "auto"    # "auto" | "always" | "never"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ui::table::{ColorChoice, Format};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "GIT_BR_CONFIG";

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Presentation defaults (user scope).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Default output format
    pub format: Option<Format>,

    /// Default color choice for table mode
    pub color: Option<ColorChoice>,
}

impl Config {
    /// Load configuration, with `flag_path` taking precedence over the
    /// environment variable and the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or parsed,
    /// or if `flag_path` is given and does not exist. Missing files at the
    /// searched locations are not an error (defaults are used).
    pub fn load(flag_path: Option<&Path>) -> Result<Self, ConfigError> {
        // 1. Explicit --config path: must resolve.
        if let Some(path) = flag_path {
            return Self::read(path);
        }

        // 2. Check $GIT_BR_CONFIG
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Self::read(&path);
            }
        }

        // 3. Check the platform config dir ($XDG_CONFIG_HOME or ~/.config)
        if let Some(config_dir) = dirs::config_dir() {
            let path = config_dir.join("git-br/config.toml");
            if path.exists() {
                return Self::read(&path);
            }
        }

        // No config found, use defaults
        Ok(Self::default())
    }

    /// Read and parse one config file.
    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Output format with the built-in default applied.
    pub fn format(&self) -> Format {
        self.format.unwrap_or_default()
    }

    /// Color choice with the built-in default applied.
    pub fn color(&self) -> ColorChoice {
        self.color.unwrap_or_default()
    }
}
