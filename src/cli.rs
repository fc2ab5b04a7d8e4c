//! CLI argument definitions for cb.
//!
//! Uses clap with derive macros for argument parsing.
//!
//! # Example
//!
//! ```no_run
//! use cmdbook::cli::Cli;
//!
//! let cli = Cli::parse_args();
//! println!("Book override: {:?}", cli.book);
//! ```

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};

use crate::completion::dynamic_script;

/// Bookmark, list and run shell commands.
#[derive(Parser, Debug)]
#[command(name = "cb")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the command book (default: ~/.cmdbook.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub book: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<CliShell>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Save a command
    Add {
        /// The command line to save
        #[arg(value_name = "COMMAND")]
        command: String,

        /// Prefix to store it under (default: the command's first word)
        #[arg(short = 'P', long, value_name = "PREFIX", default_value = "")]
        prefix: String,

        /// Short name (default: the first free cmd<N>)
        #[arg(short = 'S', long, value_name = "SHORT", default_value = "")]
        short: String,
    },

    /// Rename, move or rewrite a saved command
    Update {
        /// Current prefix
        prefix: String,

        /// Current short name
        short: String,

        /// Move the command to this prefix
        #[arg(long, value_name = "PREFIX")]
        new_prefix: Option<String>,

        /// Rename the command
        #[arg(long, value_name = "SHORT")]
        new_short: Option<String>,

        /// Replace the command text
        #[arg(long, value_name = "COMMAND")]
        new_command: Option<String>,
    },

    /// Run a saved command
    Exec {
        /// Prefix of the command
        prefix: String,

        /// Short name of the command
        short: String,

        /// Show command without executing
        #[arg(short, long)]
        dry_run: bool,
    },

    /// Delete a saved command
    #[command(alias = "rm")]
    Remove {
        /// Prefix of the command
        prefix: String,

        /// Short name of the command
        short: String,
    },

    /// Show saved commands
    #[command(alias = "ls")]
    List {
        /// Print plain text instead of opening the pager
        #[arg(long, conflicts_with = "json")]
        plain: bool,

        /// Print the book as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print completion candidates
    #[command(hide = true)]
    Complete {
        #[command(subcommand)]
        target: CompleteTarget,
    },
}

/// What the hidden `complete` subcommand lists.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CompleteTarget {
    /// Registered prefixes
    Prefixes,
    /// Short names under a prefix
    Shorts {
        /// Prefix to list
        prefix: String,
    },
    /// Candidates for the last of the given command-line words
    Line {
        /// Words after `cb`, the last one being completed
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliShell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    Powershell,
    /// Elvish shell
    Elvish,
}

impl From<CliShell> for Shell {
    fn from(shell: CliShell) -> Self {
        match shell {
            CliShell::Bash => Shell::Bash,
            CliShell::Zsh => Shell::Zsh,
            CliShell::Fish => Shell::Fish,
            CliShell::Powershell => Shell::PowerShell,
            CliShell::Elvish => Shell::Elvish,
        }
    }
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Generate shell completions and write to stdout.
    ///
    /// Bash, zsh and fish get scripts that complete prefixes and short
    /// names from the book through `cb complete line`.
    pub fn generate_completions(shell: CliShell) {
        if let Some(script) = dynamic_script(shell) {
            print!("{script}");
            return;
        }
        let mut cmd = Cli::command();
        generate(Shell::from(shell), &mut cmd, "cb", &mut std::io::stdout());
    }
}
