//! cb - command bookmarks
//!
//! Entry point for the cb CLI application.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::CommandFactory;
use env_logger::Env;
use log::debug;

use cmdbook::book::{load, save, Changes, CommandBook, Updated};
use cmdbook::cli::{Cli, Commands, CompleteTarget};
use cmdbook::completion::CompletionRequest;
use cmdbook::config::{load_config, Config};
use cmdbook::error::{exit_code, CbError};
use cmdbook::runner::{execute, ExecOptions};
use cmdbook::utils::{
    check_terminal_size, global_config_file, is_interactive, resolve_book_path,
};
use cmdbook::viewer::{build_display_list, plain_lines, run_viewer, Theme};

fn main() -> ExitCode {
    match run() {
        Ok(code) => exit_status(code),
        Err(err) => {
            // Check if it's one of our custom errors with good formatting
            if let Some(cb_err) = err.downcast_ref::<CbError>() {
                eprintln!("Error: {cb_err}");
                return exit_status(cb_err.exit_code());
            }
            eprintln!("Error: {err:#}");
            exit_status(exit_code::GENERAL_ERROR)
        }
    }
}

/// Process exit status for `code`.
///
/// Codes outside `0..=255` would wrap, so they become a general error.
fn exit_status(code: i32) -> ExitCode {
    ExitCode::from(status_byte(code))
}

fn status_byte(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(exit_code::GENERAL_ERROR as u8)
}

fn run() -> Result<i32> {
    let cli = Cli::parse_args();

    // Handle shell completions early
    if let Some(shell) = cli.completions {
        Cli::generate_completions(shell);
        return Ok(exit_code::SUCCESS);
    }

    init_logging(cli.debug);

    let Some(command) = cli.command.clone() else {
        Cli::command().print_help()?;
        return Ok(exit_code::SUCCESS);
    };

    if cli.debug {
        print_debug_header();
        eprintln!("Debug: CLI arguments = {cli:#?}");
    }

    let config = if cli.no_config {
        Config::default()
    } else {
        load_config(cli.config.as_deref())?
    };

    let book_path = resolve_book_path(cli.book.as_deref(), &config)
        .context("Could not determine home directory; pass --book <PATH>")?;

    if cli.debug {
        print_debug_paths(&cli, &book_path);
    }

    match command {
        Commands::Add {
            command,
            prefix,
            short,
        } => {
            let mut book = load(&book_path)?;
            let added = book.add(&prefix, &short, &command, config.name_rules())?;
            save(&book, &book_path)?;

            if let Some(old) = &added.replaced {
                eprintln!(
                    "Warning: replaced existing command {}/{} (was: {old})",
                    added.prefix, added.short
                );
            }
            println!("Added: {} {} -> {command}", added.prefix, added.short);
        }

        Commands::Update {
            prefix,
            short,
            new_prefix,
            new_short,
            new_command,
        } => {
            let changes = Changes::new(new_prefix, new_short, new_command);
            let mut book = load(&book_path)?;
            match book.update(&prefix, &short, &changes, config.name_rules())? {
                Updated::Unchanged => {
                    println!("No updates specified. Skipping command update.");
                }
                Updated::Moved {
                    prefix: new_prefix,
                    short: new_short,
                } => {
                    save(&book, &book_path)?;
                    println!("Updated: {prefix} {short} -> {new_prefix} {new_short}");
                }
            }
        }

        Commands::Exec {
            prefix,
            short,
            dry_run,
        } => {
            let book = load(&book_path)?;
            let options = ExecOptions {
                shell: config.general.shell.clone(),
                dry_run,
            };
            let result = execute(&book, &prefix, &short, &options)?;
            return Ok(result.code());
        }

        Commands::Remove { prefix, short } => {
            let mut book = load(&book_path)?;
            book.remove(&prefix, &short)?;
            save(&book, &book_path)?;
            println!("Removed: {prefix}/{short}");
        }

        Commands::List { plain, json } => {
            let book = load(&book_path)?;
            list_commands(&book, plain, json, &config)?;
        }

        Commands::Complete { target } => {
            for candidate in completion_candidates(&target, &book_path, &config) {
                println!("{candidate}");
            }
        }
    }

    Ok(exit_code::SUCCESS)
}

/// Answer a completion request. Completion never reports errors.
fn completion_candidates(
    target: &CompleteTarget,
    book_path: &Path,
    config: &Config,
) -> Vec<String> {
    let load_book = |path: &Path| load(path).unwrap_or_default();

    match target {
        CompleteTarget::Prefixes => owned(load_book(book_path).prefixes()),
        CompleteTarget::Shorts { prefix } => owned(load_book(book_path).shortcuts(prefix)),
        CompleteTarget::Line { words } => {
            let request = CompletionRequest::parse(words);
            let path = request
                .book
                .as_deref()
                .and_then(|book| resolve_book_path(Some(book), config))
                .unwrap_or_else(|| book_path.to_path_buf());
            debug!("Completing {:?} from {}", request.slot, path.display());
            request.candidates(&load_book(&path))
        }
    }
}

fn owned(items: Vec<&str>) -> Vec<String> {
    items.into_iter().map(str::to_string).collect()
}

/// Show the book as JSON, plain text or in the pager.
fn list_commands(book: &CommandBook, plain: bool, json: bool, config: &Config) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(&book.commands)
            .context("Failed to encode commands as JSON")?;
        println!("{out}");
        return Ok(());
    }

    // A prefix without commands still shows as a header
    let entries = build_display_list(book);
    if entries.is_empty() {
        println!("No commands saved");
        return Ok(());
    }

    if plain || !is_interactive() {
        for line in plain_lines(&entries) {
            println!("{line}");
        }
        return Ok(());
    }

    let theme = Theme::new(config.theme());
    run_viewer(&entries, &theme).context("Viewer error")
}

/// Install the logger. `RUST_LOG` wins over `--debug`.
fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();
    debug!("Logger initialized at {default_filter}");
}

// ==================== Debug Functions ====================

/// Print debug header with version info.
fn print_debug_header() {
    eprintln!("=== cb debug mode ===");
    eprintln!("Version: {}", env!("CARGO_PKG_VERSION"));
    eprintln!();
}

/// Print debug information about file paths.
fn print_debug_paths(cli: &Cli, book_path: &Path) {
    eprintln!("Debug: File locations:");

    eprintln!(
        "  Command book: {} (exists: {})",
        book_path.display(),
        book_path.exists()
    );

    if cli.no_config {
        eprintln!("  Config: <disabled by --no-config>");
    } else {
        let user_config: Option<PathBuf> = global_config_file();
        match user_config {
            Some(cfg) => eprintln!(
                "  User config: {} (exists: {})",
                cfg.display(),
                cfg.exists()
            ),
            None => eprintln!("  User config: <not available>"),
        }
        if let Some(cfg) = &cli.config {
            eprintln!(
                "  CLI config: {} (exists: {})",
                cfg.display(),
                cfg.exists()
            );
        }
    }

    match check_terminal_size() {
        Some(size) => eprintln!(
            "  Terminal: {}x{} (page size: {})",
            size.width,
            size.height,
            size.page_size()
        ),
        None => eprintln!("  Terminal: <not a terminal>"),
    }

    eprintln!();
}
