//! Configuration module for cmdbook.
//!
//! Handles loading and merging configuration from multiple sources:
//! - CLI arguments (highest priority)
//! - `--config <path>`
//! - User-level `~/.config/cmdbook/config.toml`

pub mod file;
mod types;

pub use file::{generate_example_config, load_config, load_config_with_user_path};
pub use types::{AddConfig, AppearanceConfig, Config, GeneralConfig, Theme};
