//! Runner module for cmdbook.
//!
//! Handles running stored commands through the shell.

mod executor;

pub use executor::{execute, run_in_shell, ExecOptions, ExecutionResult, DEFAULT_SHELL};
