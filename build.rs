//! Build script for cb.
//!
//! Generates man pages using clap_mangen.

use std::env;
use std::fs;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};

/// Minimal CLI struct for man page generation.
///
/// This duplicates the CLI definition to avoid build dependency issues.
#[derive(Parser)]
#[command(name = "cb")]
#[command(author, version, about = "Bookmark, list and run shell commands")]
#[command(
    long_about = "cb keeps a personal book of shell commands grouped by prefix and \
    short name, stored in ~/.cmdbook.toml.\n\n\
    Save a command with `cb add`, run it with `cb exec <prefix> <short>`, and browse \
    everything with `cb list`. Use arrow keys to scroll the list and q to quit."
)]
struct Cli {
    /// Path to the command book (default: ~/.cmdbook.toml)
    #[arg(long, global = true, value_name = "PATH")]
    book: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long, global = true)]
    no_config: bool,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    completions: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
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
}

#[derive(Clone, Copy, ValueEnum)]
enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
    Elvish,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Only generate man pages for release builds or when explicitly requested
    let profile = env::var("PROFILE").unwrap_or_default();
    if profile != "release" && env::var("CMDBOOK_GEN_MANPAGE").is_err() {
        return;
    }

    let out_dir = match env::var_os("OUT_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => return,
    };

    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);

    let mut buffer = Vec::new();
    man.render(&mut buffer).expect("Failed to generate man page");

    let man_path = out_dir.join("cb.1");
    fs::write(&man_path, buffer).expect("Failed to write man page");

    // Also copy to docs directory for distribution
    if let Some(manifest_dir) = env::var_os("CARGO_MANIFEST_DIR") {
        let docs_dir = PathBuf::from(manifest_dir).join("docs");
        if docs_dir.exists() {
            let _ = fs::copy(&man_path, docs_dir.join("cb.1"));
        }
    }
}
