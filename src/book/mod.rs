//! Command book module for cmdbook.
//!
//! Holds the prefix -> short name -> command document, the rules for
//! changing it, and its TOML persistence.

mod registry;
pub mod store;
mod types;

pub use store::{load, save};
pub use types::{
    Added, Changes, CommandBook, CommandEntry, NameRules, PrefixCommands, Updated,
    DEFAULT_MAX_SHORT_LEN,
};
