//! Custom error types for cmdbook.
//!
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes for cb.
pub mod exit_code {
    /// Success.
    pub const SUCCESS: i32 = 0;
    /// General error.
    pub const GENERAL_ERROR: i32 = 1;
    /// Referenced prefix or short name does not exist.
    pub const NOT_FOUND: i32 = 2;
    /// Rename target already exists.
    pub const ALREADY_EXISTS: i32 = 3;
    /// Rejected input (short name too long, empty command).
    pub const INVALID_INPUT: i32 = 4;
    /// Command book could not be read, parsed or written.
    pub const STORE_ERROR: i32 = 5;
    /// Invalid configuration.
    pub const INVALID_CONFIG: i32 = 6;
    /// Interrupted (Ctrl+C).
    pub const INTERRUPTED: i32 = 130;
}

/// Main error type for cmdbook.
#[derive(Error, Debug)]
pub enum CbError {
    /// IO error with path context.
    #[error("Failed to {operation} '{path}': {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The command book exists but is not valid TOML.
    #[error("Failed to parse command book at {path}:\n  {message}\n\nTip: The file must contain a [commands] table of prefix tables, e.g.\n  [commands.git]\n  st = \"git status\"")]
    Parse { path: PathBuf, message: String },

    /// The command book could not be encoded.
    #[error("Failed to serialize command book: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Prefix or short name not found.
    #[error("Command not found: {prefix}/{short}")]
    NotFound { prefix: String, short: String },

    /// Prefix or short name not found, with close matches.
    #[error("Command not found: {prefix}/{short}\n\nDid you mean: {suggestions}?\n\nRun 'cb list' to see all saved commands.")]
    NotFoundWithSuggestions {
        prefix: String,
        short: String,
        suggestions: String,
    },

    /// Rename target collides with an existing short name.
    #[error("Short name already exists: {prefix}/{short}")]
    AlreadyExists { prefix: String, short: String },

    /// Input rejected before touching the book.
    #[error("{message}")]
    Validation { message: String },

    /// The shell could not be started.
    #[error("Failed to execute '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The shell command exited unsuccessfully.
    #[error("Command {prefix}/{short} failed with exit code {code}")]
    CommandFailed {
        prefix: String,
        short: String,
        code: i32,
    },

    /// Invalid configuration file.
    #[error("Invalid config at {path}:\n  {message}\n\nTip: Check the config file syntax and ensure all values are valid.")]
    InvalidConfig { path: PathBuf, message: String },
}

impl CbError {
    /// Get the exit code for this error.
    ///
    /// A failed shell command forwards its own exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            CbError::Io { .. } => exit_code::STORE_ERROR,
            CbError::Parse { .. } => exit_code::STORE_ERROR,
            CbError::Serialize(_) => exit_code::STORE_ERROR,
            CbError::NotFound { .. } => exit_code::NOT_FOUND,
            CbError::NotFoundWithSuggestions { .. } => exit_code::NOT_FOUND,
            CbError::AlreadyExists { .. } => exit_code::ALREADY_EXISTS,
            CbError::Validation { .. } => exit_code::INVALID_INPUT,
            CbError::Spawn { .. } => exit_code::GENERAL_ERROR,
            CbError::CommandFailed { code, .. } => *code,
            CbError::InvalidConfig { .. } => exit_code::INVALID_CONFIG,
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        CbError::Validation {
            message: message.into(),
        }
    }

    /// Create a not found error with suggestions based on the stored keys.
    ///
    /// `known` holds `prefix/short` keys.
    pub fn not_found_with_suggestions(prefix: &str, short: &str, known: &[String]) -> Self {
        let wanted = format!("{prefix}/{short}");
        let suggestions = find_similar_keys(&wanted, known);
        if suggestions.is_empty() {
            CbError::NotFound {
                prefix: prefix.to_string(),
                short: short.to_string(),
            }
        } else {
            CbError::NotFoundWithSuggestions {
                prefix: prefix.to_string(),
                short: short.to_string(),
                suggestions: suggestions.join(", "),
            }
        }
    }

    /// Whether this error means the requested command does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CbError::NotFound { .. } | CbError::NotFoundWithSuggestions { .. }
        )
    }
}

/// Find stored keys close to `wanted` using simple string distance.
fn find_similar_keys(wanted: &str, known: &[String]) -> Vec<String> {
    let wanted_lower = wanted.to_lowercase();
    let mut matches: Vec<(&str, usize)> = known
        .iter()
        .filter_map(|k| {
            let k_lower = k.to_lowercase();
            let dist = simple_distance(&wanted_lower, &k_lower);
            if dist <= 3 || k_lower.contains(&wanted_lower) || wanted_lower.contains(&k_lower) {
                Some((k.as_str(), dist))
            } else {
                None
            }
        })
        .collect();

    matches.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));

    matches
        .into_iter()
        .take(3)
        .map(|(k, _)| format!("'{k}'"))
        .collect()
}

/// Levenshtein distance over chars.
fn simple_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    // Two rolling rows are enough.
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, ca) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// Result type alias for cmdbook operations.
pub type Result<T> = std::result::Result<T, CbError>;
