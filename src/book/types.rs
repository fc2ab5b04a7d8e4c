//! Command book data types.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Default maximum length of a short name.
pub const DEFAULT_MAX_SHORT_LEN: usize = 20;

/// Short-name commands stored under one prefix.
pub type PrefixCommands = BTreeMap<String, String>;

/// The whole persisted document: prefix -> short name -> command text.
///
/// Maps are ordered so that every listing is sorted by (prefix, short).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandBook {
    /// Commands grouped by prefix.
    #[serde(default)]
    pub commands: BTreeMap<String, PrefixCommands>,
}

impl CommandBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored commands across all prefixes.
    pub fn len(&self) -> usize {
        self.commands.values().map(BTreeMap::len).sum()
    }

    /// Check if no commands are stored.
    ///
    /// A book holding only empty prefix tables counts as empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a command without producing an error.
    pub fn lookup(&self, prefix: &str, short: &str) -> Option<&str> {
        self.commands
            .get(prefix)
            .and_then(|cmds| cmds.get(short))
            .map(String::as_str)
    }

    /// Iterate over all stored commands, sorted by prefix then short name.
    pub fn entries(&self) -> impl Iterator<Item = CommandEntry> + '_ {
        self.commands.iter().flat_map(|(prefix, cmds)| {
            cmds.iter()
                .map(move |(short, command)| CommandEntry::new(prefix, short, command))
        })
    }

    /// All stored keys formatted as `prefix/short`.
    pub fn keys(&self) -> Vec<String> {
        self.entries()
            .map(|e| format!("{}/{}", e.prefix, e.short))
            .collect()
    }
}

/// One command as seen by the viewer.
///
/// A header entry has empty `short` and `command` and stands for the
/// section title of its prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandEntry {
    /// Prefix namespace.
    pub prefix: String,
    /// Short name (empty for headers).
    pub short: String,
    /// Command text (empty for headers).
    pub command: String,
}

impl CommandEntry {
    /// Create a command entry.
    pub fn new(prefix: &str, short: &str, command: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            short: short.to_string(),
            command: command.to_string(),
        }
    }

    /// Create a header entry for a prefix.
    pub fn header(prefix: &str) -> Self {
        Self::new(prefix, "", "")
    }

    /// Check if this entry is a prefix header.
    pub fn is_header(&self) -> bool {
        self.short.is_empty() && self.command.is_empty()
    }
}

impl fmt::Display for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_header() {
            write!(f, "{}", self.prefix)
        } else {
            write!(f, "{}/{}: {}", self.prefix, self.short, self.command)
        }
    }
}

/// Rules applied when naming commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameRules {
    /// Maximum short-name length in characters, `None` for no limit.
    pub max_short_len: Option<usize>,
}

impl NameRules {
    /// Rules without any length limit.
    pub fn unlimited() -> Self {
        Self {
            max_short_len: None,
        }
    }

    /// Build rules from a configured limit where `0` disables the check.
    pub fn from_limit(limit: usize) -> Self {
        Self {
            max_short_len: (limit > 0).then_some(limit),
        }
    }
}

impl Default for NameRules {
    fn default() -> Self {
        Self {
            max_short_len: Some(DEFAULT_MAX_SHORT_LEN),
        }
    }
}

/// Result of adding a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Added {
    /// Resolved prefix.
    pub prefix: String,
    /// Resolved short name.
    pub short: String,
    /// Command text that was replaced, if the key already existed.
    pub replaced: Option<String>,
}

/// Requested changes for an update. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changes {
    /// New prefix.
    pub prefix: Option<String>,
    /// New short name.
    pub short: Option<String>,
    /// New command text.
    pub command: Option<String>,
}

impl Changes {
    /// Build changes from optional flags, treating empty strings as unset.
    pub fn new(prefix: Option<String>, short: Option<String>, command: Option<String>) -> Self {
        let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());
        Self {
            prefix: non_empty(prefix),
            short: non_empty(short),
            command: non_empty(command),
        }
    }

    /// Check if nothing would change.
    pub fn is_empty(&self) -> bool {
        self.prefix.is_none() && self.short.is_none() && self.command.is_none()
    }
}

/// Result of an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Updated {
    /// No changes were requested; the book is untouched.
    Unchanged,
    /// The command now lives under the given key.
    Moved { prefix: String, short: String },
}
