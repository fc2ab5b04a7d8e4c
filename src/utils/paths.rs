//! Path utilities.

use std::path::{Path, PathBuf};

use crate::config::Config;

/// File name of the command book in the home directory.
pub const DEFAULT_BOOK_FILE_NAME: &str = ".cmdbook.toml";

/// Get the config directory for cmdbook.
///
/// Returns `~/.config/cmdbook` on Linux.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("cmdbook"))
}

/// Get the global config file path.
///
/// Returns `~/.config/cmdbook/config.toml` on Linux.
pub fn global_config_file() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Get the default command book path, `~/.cmdbook.toml`.
pub fn default_book_file() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(DEFAULT_BOOK_FILE_NAME))
}

/// Replace a leading `~` with the home directory.
///
/// Paths without a leading `~`, or when no home directory is known, are
/// returned unchanged.
pub fn expand_tilde(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

/// Resolve where the command book lives.
///
/// Priority: `--book` flag, then `general.book` from config, then
/// `~/.cmdbook.toml`. Returns `None` only when no home directory is known.
pub fn resolve_book_path(cli_book: Option<&Path>, config: &Config) -> Option<PathBuf> {
    cli_book
        .map(expand_tilde)
        .or_else(|| config.book_path())
        .or_else(default_book_file)
}
