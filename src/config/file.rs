//! Configuration file loading and parsing.

use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::error::{CbError, Result};

use super::types::Config;

/// Load configuration from the specified path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| CbError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    toml::from_str(&content).map_err(|e| CbError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.to_string().trim_end().to_string(),
    })
}

/// Load configuration with proper priority and merging.
///
/// Sources in order of priority (lowest to highest):
/// 1. `~/.config/cmdbook/config.toml` (user-level)
/// 2. CLI argument `--config <path>`
///
/// A broken user-level file is reported and skipped.
///
/// # Errors
///
/// Returns an error if the CLI-specified file cannot be read or parsed.
pub fn load_config(cli_config_path: Option<&Path>) -> Result<Config> {
    load_config_with_user_path(cli_config_path, Config::user_config_path().as_deref())
}

/// Same as [`load_config`] with an explicit user config location.
pub fn load_config_with_user_path(
    cli_config_path: Option<&Path>,
    user_config_path: Option<&Path>,
) -> Result<Config> {
    let mut config = Config::default();

    if let Some(user_path) = user_config_path.filter(|p| p.exists()) {
        match load_config_from_path(user_path) {
            Ok(user_config) => {
                debug!("Loaded user config from {}", user_path.display());
                config.merge(user_config);
            }
            Err(e) => warn!("Ignoring user config: {e}"),
        }
    }

    if let Some(cli_path) = cli_config_path {
        let cli_config = load_config_from_path(cli_path)?;
        debug!("Loaded config from {}", cli_path.display());
        config.merge(cli_config);
    }

    Ok(config)
}

/// Generate an example configuration file with all options documented.
pub fn generate_example_config() -> String {
    r#"# cmdbook Configuration File
# Place this file at ~/.config/cmdbook/config.toml

# General settings
[general]
# Where commands are stored (a leading ~ is your home directory)
# book = "~/.cmdbook.toml"

# Shell used by `cb exec` (default: sh on Unix, cmd on Windows)
# shell = "bash"

# Add/rename settings
[add]
# Maximum length of a short name (0 = unlimited)
max_short_len = 20

# Appearance settings
[appearance]
# Color theme: "default", "minimal", "none"
theme = "default"
"#
    .to_string()
}
