//! Mutation and query rules for the command book.
//!
//! Every operation works on an already loaded [`CommandBook`] and leaves it
//! untouched when it fails.

use log::{debug, info};

use crate::error::{CbError, Result};

use super::types::{Added, Changes, CommandBook, NameRules, Updated};

/// Prefix for generated short names (`cmd0`, `cmd1`, ...).
const GENERATED_SHORT_PREFIX: &str = "cmd";

impl CommandBook {
    /// Add a command, overwriting any command stored under the same key.
    ///
    /// An empty `prefix` becomes the first word of `command`. An empty `short`
    /// becomes the first unused `cmd<N>` under that prefix.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the command is blank, no prefix can be
    /// derived, or the short name is longer than the rules allow.
    pub fn add(
        &mut self,
        prefix: &str,
        short: &str,
        command: &str,
        rules: NameRules,
    ) -> Result<Added> {
        if command.trim().is_empty() {
            return Err(CbError::validation("Command text must not be empty"));
        }

        let prefix = if prefix.is_empty() {
            command.split_whitespace().next().unwrap_or_default()
        } else {
            prefix
        };

        let short = if short.is_empty() {
            self.next_free_short(prefix)
        } else {
            short.to_string()
        };

        check_short_len(&short, rules)?;

        let replaced = self
            .commands
            .entry(prefix.to_string())
            .or_default()
            .insert(short.clone(), command.to_string());

        if let Some(old) = &replaced {
            info!("Overwrote {prefix}/{short} (was: {old})");
        }
        debug!("Added {prefix}/{short} -> {command}");

        Ok(Added {
            prefix: prefix.to_string(),
            short,
            replaced,
        })
    }

    /// Remove a command and return its text.
    ///
    /// The prefix is dropped once its last command is removed.
    ///
    /// # Errors
    ///
    /// Returns a not found error if the prefix or short name is unknown.
    pub fn remove(&mut self, prefix: &str, short: &str) -> Result<String> {
        let removed = self
            .commands
            .get_mut(prefix)
            .and_then(|cmds| cmds.remove(short))
            .ok_or_else(|| self.not_found(prefix, short))?;

        self.prune(prefix);
        debug!("Removed {prefix}/{short}");

        Ok(removed)
    }

    /// Move, rename or rewrite a stored command.
    ///
    /// Changes are applied in order prefix, short name, command text. Each
    /// step sees the result of the previous one.
    ///
    /// # Errors
    ///
    /// Returns a not found error if the old key is unknown, an already exists
    /// error if the destination key is taken, and a validation error if the
    /// new short name is too long.
    pub fn update(
        &mut self,
        old_prefix: &str,
        old_short: &str,
        changes: &Changes,
        rules: NameRules,
    ) -> Result<Updated> {
        let original = self
            .lookup(old_prefix, old_short)
            .ok_or_else(|| self.not_found(old_prefix, old_short))?
            .to_string();

        if changes.is_empty() {
            info!("No updates specified for {old_prefix}/{old_short}");
            return Ok(Updated::Unchanged);
        }

        // Work on a copy so a failing step leaves the book as it was.
        let mut work = self.clone();
        let mut prefix = old_prefix.to_string();
        let mut short = old_short.to_string();

        if let Some(new_prefix) = &changes.prefix {
            if new_prefix != old_prefix {
                if work.lookup(new_prefix, old_short).is_some() {
                    return Err(CbError::AlreadyExists {
                        prefix: new_prefix.clone(),
                        short: old_short.to_string(),
                    });
                }
                if let Some(cmds) = work.commands.get_mut(old_prefix) {
                    cmds.remove(old_short);
                }
                work.prune(old_prefix);
                work.commands
                    .entry(new_prefix.clone())
                    .or_default()
                    .insert(old_short.to_string(), original.clone());
            }
            prefix = new_prefix.clone();
        }

        if let Some(new_short) = &changes.short {
            check_short_len(new_short, rules)?;
            let cmds = work.commands.entry(prefix.clone()).or_default();
            if cmds.contains_key(new_short) {
                return Err(CbError::AlreadyExists {
                    prefix,
                    short: new_short.clone(),
                });
            }
            let command = cmds.remove(old_short).unwrap_or_else(|| original.clone());
            cmds.insert(new_short.clone(), command);
            short = new_short.clone();
        }

        if let Some(new_command) = &changes.command {
            work.commands
                .entry(prefix.clone())
                .or_default()
                .insert(short.clone(), new_command.clone());
        }

        *self = work;
        debug!("Updated {old_prefix}/{old_short} -> {prefix}/{short}");

        Ok(Updated::Moved { prefix, short })
    }

    /// Resolve a stored command.
    ///
    /// # Errors
    ///
    /// Returns a not found error if the prefix or short name is unknown.
    pub fn get(&self, prefix: &str, short: &str) -> Result<&str> {
        self.lookup(prefix, short)
            .ok_or_else(|| self.not_found(prefix, short))
    }

    /// All registered prefixes, sorted.
    pub fn prefixes(&self) -> Vec<&str> {
        self.commands.keys().map(String::as_str).collect()
    }

    /// Short names registered under `prefix`, sorted.
    ///
    /// Unknown prefixes yield an empty list.
    pub fn shortcuts(&self, prefix: &str) -> Vec<&str> {
        self.commands
            .get(prefix)
            .map(|cmds| cmds.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// First `cmd<N>` not yet used under `prefix`.
    fn next_free_short(&self, prefix: &str) -> String {
        let existing = self.commands.get(prefix);
        (0..)
            .map(|n| format!("{GENERATED_SHORT_PREFIX}{n}"))
            .find(|candidate| existing.map_or(true, |cmds| !cmds.contains_key(candidate)))
            .unwrap_or_default()
    }

    /// Drop `prefix` if it holds no commands.
    fn prune(&mut self, prefix: &str) {
        if self.commands.get(prefix).is_some_and(|cmds| cmds.is_empty()) {
            self.commands.remove(prefix);
            debug!("Pruned empty prefix {prefix}");
        }
    }

    fn not_found(&self, prefix: &str, short: &str) -> CbError {
        CbError::not_found_with_suggestions(prefix, short, &self.keys())
    }
}

fn check_short_len(short: &str, rules: NameRules) -> Result<()> {
    match rules.max_short_len {
        Some(max) if short.chars().count() > max => Err(CbError::validation(format!(
            "Short name '{short}' exceeds maximum length of {max} characters"
        ))),
        _ => Ok(()),
    }
}
