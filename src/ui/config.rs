//! # Configuration
//!
//! Reads the style and clipboard settings from `~/.config/whale/config.json`,
//! falling back to the default document compiled into the binary.
//!
//! ## Format
//!
//! ```json
//! {
//!   "Ui": {
//!     "cursorColor": "36",
//!     "branchColor": "35",
//!     "containerSelectedColor": "1;32",
//!     "actionSelectedColor": "1;33"
//!   },
//!   "Clipboard": "auto"
//! }
//! ```
//!
//! Unlike most settings files, a broken one is not silently replaced by the
//! defaults: any read, syntax, or style error is
//! [`WhaleError::ConfigurationInvalid`] and stops the program at startup.
//!
//! The `directories` crate is used to resolve the platform-appropriate config
//! directory.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::action::clipboard::ClipboardBackend;
use crate::error::{Result, WhaleError};
use crate::ui::theme::{StyleToken, Theme};

/// The configuration document shipped with the binary.
pub const DEFAULT_CONFIG: &str = include_str!("../../assets/config.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(rename = "Ui")]
    pub ui: UiConfig,

    #[serde(rename = "Clipboard", default)]
    pub clipboard: ClipboardBackend,
}

/// Raw style tokens, validated by [`Config::theme`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct UiConfig {
    pub cursor_color: String,
    pub branch_color: String,
    pub container_selected_color: String,
    pub action_selected_color: String,
}

impl Config {
    /// Load the user's config file if there is one, else the built-in default.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Self::from_json(DEFAULT_CONFIG),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            WhaleError::ConfigurationInvalid(format!(
                "failed to read {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json(&contents).map_err(|e| match e {
            WhaleError::ConfigurationInvalid(msg) => {
                WhaleError::ConfigurationInvalid(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Parse and validate a configuration document.
    pub fn from_json(contents: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(contents)
            .map_err(|e| WhaleError::ConfigurationInvalid(e.to_string()))?;
        config.theme()?;
        Ok(config)
    }

    /// Build the validated style set.
    pub fn theme(&self) -> Result<Theme> {
        Ok(Theme {
            cursor: StyleToken::parse(&self.ui.cursor_color)?,
            branch: StyleToken::parse(&self.ui.branch_color)?,
            container_selected: StyleToken::parse(&self.ui.container_selected_color)?,
            action_selected: StyleToken::parse(&self.ui.action_selected_color)?,
        })
    }

    /// Return the path to the user config file, when a home directory exists.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "whale")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }
}
