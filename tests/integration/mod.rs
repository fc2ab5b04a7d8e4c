//! Integration tests for cmdbook.
//!
//! This module contains integration tests organized by feature:
//!
//! - `fixtures` - Test helpers for creating temporary command books
//! - `cli_tests` - CLI interface tests
//! - `config_tests` - Configuration loading and merging tests
//! - `store_tests` - Book persistence and mutation tests

pub mod cli_tests;
pub mod config_tests;
