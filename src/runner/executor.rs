//! Command execution.
//!
//! Stored commands are run verbatim through the platform shell. They are
//! trusted user input and are not escaped or sanitized; the child inherits
//! the environment and the standard streams of this process.

use std::process::{Command, ExitStatus, Stdio};

use log::debug;

use crate::book::CommandBook;
use crate::error::{exit_code, CbError, Result};

/// Default shell on Unix-like systems.
#[cfg(not(windows))]
pub const DEFAULT_SHELL: &str = "sh";
/// Default shell on Windows.
#[cfg(windows)]
pub const DEFAULT_SHELL: &str = "cmd";

/// Options controlling how a command is run.
#[derive(Debug, Clone, Default)]
pub struct ExecOptions {
    /// Shell program overriding [`DEFAULT_SHELL`].
    pub shell: Option<String>,
    /// Print the command instead of running it.
    pub dry_run: bool,
}

impl ExecOptions {
    /// Shell program to use.
    pub fn shell(&self) -> &str {
        self.shell.as_deref().unwrap_or(DEFAULT_SHELL)
    }
}

/// Result of a successful execution.
#[derive(Debug)]
pub struct ExecutionResult {
    /// Exit status of the shell, `None` for a dry run.
    pub status: Option<ExitStatus>,
    /// The command line that was run.
    pub command: String,
}

impl ExecutionResult {
    /// Get the exit code.
    pub fn code(&self) -> i32 {
        self.status
            .map(|s| status_code(&s))
            .unwrap_or(exit_code::SUCCESS)
    }
}

/// Run the command stored under `prefix`/`short`.
///
/// Blocks until the shell exits.
///
/// # Errors
///
/// Returns a not found error if the command is not stored, a spawn error if
/// the shell cannot be started, and a command failed error carrying the exit
/// code if the shell exits unsuccessfully.
pub fn execute(
    book: &CommandBook,
    prefix: &str,
    short: &str,
    options: &ExecOptions,
) -> Result<ExecutionResult> {
    let command = book.get(prefix, short)?.to_string();

    if options.dry_run {
        println!("Would run: {command}");
        return Ok(ExecutionResult {
            status: None,
            command,
        });
    }

    let status = run_in_shell(&command, options.shell())?;

    if !status.success() {
        return Err(CbError::CommandFailed {
            prefix: prefix.to_string(),
            short: short.to_string(),
            code: status_code(&status),
        });
    }

    Ok(ExecutionResult {
        status: Some(status),
        command,
    })
}

/// Run a command line through `shell`, inheriting stdio.
///
/// # Errors
///
/// Returns a spawn error if the shell cannot be started.
pub fn run_in_shell(command_line: &str, shell: &str) -> Result<ExitStatus> {
    debug!("Running through {shell}: {command_line}");

    let mut command = Command::new(shell);
    command.arg(shell_flag(shell)).arg(command_line);

    // Inherit stdio for interactive commands
    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());

    let status = command.status().map_err(|source| CbError::Spawn {
        command: command_line.to_string(),
        source,
    })?;

    debug!("Command exited with {status}");
    Ok(status)
}

/// Flag that makes `shell` read its command from the next argument.
fn shell_flag(shell: &str) -> &'static str {
    let name = std::path::Path::new(shell)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(shell)
        .to_ascii_lowercase();

    match name.as_str() {
        "cmd" => "/C",
        "powershell" | "pwsh" => "-Command",
        _ => "-c",
    }
}

/// Exit code to report for a finished child.
///
/// A child killed by a signal reports `128 + signal`, as shells do.
fn status_code(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    exit_code::GENERAL_ERROR
}
