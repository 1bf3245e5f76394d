//! Configuration for select sessions.
//!
//! Two layers:
//! - [`Config`]: ambient settings from `~/.config/tty-select/config.toml`
//! - [`SelectOptions`]: the resolved option set for one session
//!
//! Per-session settings (builder calls, CLI flags) override the file, which
//! overrides the built-in defaults.
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/tty-select/config.toml
//! prefix = "? "
//! marker = ">"
//! active_color = "cyan"
//! help_color = "dark_grey"
//! ```

use std::path::{Path, PathBuf};

use crossterm::style::Color;
use serde::Deserialize;
use tracing::warn;

use crate::error::Result;
use crate::tui::theme::{self, ACTIVE_COLOR, DEFAULT_MARKER, HELP_COLOR};

// ============================================================================
// SESSION OPTIONS
// ============================================================================

/// Everything that shapes one select session.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOptions {
    /// Default candidates (1-based). Only the first seeds the highlight,
    /// but all of them are validated.
    pub defaults: Vec<usize>,
    /// Glyph in front of the active row.
    pub marker: String,
    /// Delimiter after row numbers. `Some` enables numeric-jump mode.
    pub enumeration_delimiter: Option<String>,
    pub active_color: Color,
    pub help_color: Color,
    /// Replaces the generated help text when set.
    pub help: Option<String>,
    /// Printed before the question.
    pub prefix: String,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            defaults: vec![1],
            marker: DEFAULT_MARKER.to_string(),
            enumeration_delimiter: None,
            active_color: ACTIVE_COLOR,
            help_color: HELP_COLOR,
            help: None,
            prefix: String::new(),
        }
    }
}

impl SelectOptions {
    /// Whether typing a digit jumps to that row.
    pub fn numeric_jump(&self) -> bool {
        self.enumeration_delimiter.is_some()
    }
}

// ============================================================================
// CONFIG FILE
// ============================================================================

/// Ambient settings read from the config file.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub prefix: Option<String>,
    pub marker: Option<String>,
    /// Color name, e.g. `green` or `dark_cyan`.
    pub active_color: Option<String>,
    pub help_color: Option<String>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if the file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml(&contents) {
                Ok(config) => config,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to parse config file");
                    Self::default()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read config file");
                Self::default()
            }
        }
    }

    pub fn from_toml(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tty-select")
            .join("config.toml")
    }

    /// Layer the file settings over the built-in defaults.
    ///
    /// Fails if a color name is not recognized.
    pub fn into_options(self) -> Result<SelectOptions> {
        let mut options = SelectOptions::default();

        if let Some(prefix) = self.prefix {
            options.prefix = prefix;
        }
        if let Some(marker) = self.marker {
            options.marker = marker;
        }
        if let Some(name) = self.active_color {
            options.active_color = theme::parse_color(&name)?;
        }
        if let Some(name) = self.help_color {
            options.help_color = theme::parse_color(&name)?;
        }

        Ok(options)
    }
}

// ============================================================================
// TESTS
// ============================================================================
