//! Configuration type definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::book::{NameRules, DEFAULT_MAX_SHORT_LEN};
use crate::utils::expand_tilde;

/// Color theme for the pager and listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Full color theme.
    #[default]
    Default,
    /// Minimal colors.
    Minimal,
    /// No colors (monochrome).
    None,
}

/// General configuration settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Location of the command book. A leading `~` is the home directory.
    #[serde(default)]
    pub book: Option<PathBuf>,
    /// Shell program used to run commands.
    #[serde(default)]
    pub shell: Option<String>,
}

/// Settings applied when adding or renaming commands.
///
/// Unset keys fall through to lower-priority files, then to the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddConfig {
    /// Maximum short-name length (0 = unlimited).
    #[serde(default)]
    pub max_short_len: Option<usize>,
}

/// Appearance configuration settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// Color theme.
    #[serde(default)]
    pub theme: Option<Theme>,
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Add/rename settings.
    #[serde(default)]
    pub add: AddConfig,
    /// Appearance settings.
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

impl Config {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the user config file path.
    ///
    /// Returns `~/.config/cmdbook/config.toml` on Linux.
    pub fn user_config_path() -> Option<PathBuf> {
        crate::utils::global_config_file()
    }

    /// Merge another config into this one.
    ///
    /// Values from `other` take precedence. Unset optional values keep
    /// the current ones.
    pub fn merge(&mut self, other: Config) {
        if other.general.book.is_some() {
            self.general.book = other.general.book;
        }
        if other.general.shell.is_some() {
            self.general.shell = other.general.shell;
        }

        if other.add.max_short_len.is_some() {
            self.add.max_short_len = other.add.max_short_len;
        }
        if other.appearance.theme.is_some() {
            self.appearance.theme = other.appearance.theme;
        }
    }

    /// Effective short-name cap, 0 meaning unlimited.
    pub fn max_short_len(&self) -> usize {
        self.add.max_short_len.unwrap_or(DEFAULT_MAX_SHORT_LEN)
    }

    /// Effective color theme.
    pub fn theme(&self) -> Theme {
        self.appearance.theme.unwrap_or_default()
    }

    /// Naming rules derived from the `[add]` section.
    pub fn name_rules(&self) -> NameRules {
        NameRules::from_limit(self.max_short_len())
    }

    /// Configured book location with `~` expanded.
    pub fn book_path(&self) -> Option<PathBuf> {
        self.general.book.as_deref().map(expand_tilde)
    }
}
