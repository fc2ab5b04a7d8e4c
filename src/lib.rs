//! cmdbook - a bookmark manager for shell commands
//!
//! Frequently used command lines are stored under a two-level key: a
//! *prefix* grouping related commands and a *short* name unique within that
//! prefix. The whole book is persisted as a single TOML file and can be
//! listed, executed, renamed and pruned from the `cb` binary.
//!
//! # Modules
//!
//! - [`book`] - The command book, its mutations and TOML persistence
//! - [`cli`] - Command-line interface argument parsing
//! - [`completion`] - Shell completion from stored prefixes and short names
//! - [`config`] - Configuration file loading and types
//! - [`error`] - Error types and result helpers
//! - [`runner`] - Running stored commands through the shell
//! - [`utils`] - Path and terminal utilities
//! - [`viewer`] - Display list and the interactive pager
//!
//! # Example
//!
//! ```no_run
//! use cmdbook::book::{load, save, NameRules};
//! use std::path::Path;
//!
//! let path = Path::new("/tmp/cmdbook.toml");
//! let mut book = load(path).expect("Failed to load book");
//!
//! let added = book
//!     .add("", "", "git status --short", NameRules::default())
//!     .expect("Failed to add command");
//! assert_eq!(added.prefix, "git");
//!
//! save(&book, path).expect("Failed to save book");
//! ```

/// Command storage and mutation.
pub mod book;

/// CLI argument definitions.
pub mod cli;

/// Shell completion backed by the book.
pub mod completion;

/// Configuration system for loading and merging settings.
pub mod config;

/// Error types and result helpers.
pub mod error;

/// Command execution.
pub mod runner;

/// Path and terminal utilities.
pub mod utils;

/// Display list and interactive pager.
pub mod viewer;

// Re-export commonly used types
pub use book::{CommandBook, CommandEntry};
pub use cli::Cli;
pub use config::Config;
pub use error::{CbError, Result};
