//! Utility module for cmdbook.
//!
//! Common utilities for paths and terminal handling.

mod paths;
mod terminal;

pub use paths::{
    config_dir, default_book_file, expand_tilde, global_config_file, resolve_book_path,
    DEFAULT_BOOK_FILE_NAME,
};
pub use terminal::{
    check_terminal_size, is_interactive, page_size_for_height, TerminalSize, FALLBACK_PAGE_SIZE,
    FOOTER_HEIGHT,
};
