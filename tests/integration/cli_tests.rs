//! CLI integration tests for cb.
//!
//! These tests verify the command-line interface behavior using assert_cmd.
//! Every invocation points at a temporary book and ignores config files.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

use crate::integration::fixtures::{book_with, empty_book, large_book, standard_book, TempBook};

/// Get a Command for the cb binary bound to `book`.
fn cb(book: &TempBook) -> Command {
    let mut cmd = cargo_bin_cmd!("cb");
    cmd.arg("--no-config").arg("--book").arg(book.arg());
    cmd.env_remove("RUST_LOG");
    cmd
}

// ==================== Help and Version ====================

#[test]
fn test_help_output() {
    cargo_bin_cmd!("cb")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("exec"))
        .stdout(predicate::str::contains("--book"))
        .stdout(predicate::str::contains("Print completion candidates").not());
}

#[test]
fn test_version_output() {
    cargo_bin_cmd!("cb")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cb"))
        .stdout(predicate::str::is_match(r"\d+\.\d+\.\d+").unwrap());
}

#[test]
fn test_no_subcommand_prints_help() {
    let book = empty_book();
    cb(&book)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

// ==================== Add ====================

#[test]
fn test_add_derives_prefix_and_short() {
    let book = empty_book();

    cb(&book)
        .args(["add", "echo hi"])
        .assert()
        .success()
        .stdout("Added: echo cmd0 -> echo hi\n");

    assert!(book.contents().contains("[commands.echo]"));
    assert!(book.contents().contains("cmd0 = \"echo hi\""));
}

#[test]
fn test_add_with_explicit_keys() {
    let book = empty_book();

    cb(&book)
        .args(["add", "git status", "-P", "g", "-S", "st"])
        .assert()
        .success()
        .stdout("Added: g st -> git status\n");

    cb(&book)
        .args(["add", "git log", "--prefix", "g"])
        .assert()
        .success()
        .stdout("Added: g cmd0 -> git log\n");
}

#[test]
fn test_add_fills_first_gap() {
    let book = book_with("[commands.echo]\ncmd0 = \"echo a\"\ncmd2 = \"echo c\"\n");

    cb(&book)
        .args(["add", "echo b"])
        .assert()
        .success()
        .stdout("Added: echo cmd1 -> echo b\n");
}

#[test]
fn test_add_overwrite_warns() {
    let book = standard_book();

    cb(&book)
        .args(["add", "git status -sb", "-P", "git", "-S", "st"])
        .assert()
        .success()
        .stdout("Added: git st -> git status -sb\n")
        .stderr(predicate::str::contains("replaced existing command git/st"));

    assert!(book.contents().contains("st = \"git status -sb\""));
}

#[test]
fn test_add_rejects_long_short() {
    let book = empty_book();

    cb(&book)
        .args(["add", "ls", "-S", "a-very-long-short-name-indeed"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("exceeds maximum length"));

    assert!(!book.path.exists());
}

#[test]
fn test_add_long_short_allowed_when_cap_disabled() {
    let book = empty_book();
    let config = book.write_config("[add]\nmax_short_len = 0\n");

    cargo_bin_cmd!("cb")
        .arg("--book")
        .arg(book.arg())
        .arg("--config")
        .arg(&config)
        .args(["add", "ls", "-S", "a-very-long-short-name-indeed"])
        .assert()
        .success();
}

#[test]
fn test_add_blank_command_is_rejected() {
    let book = empty_book();

    cb(&book).args(["add", "   "]).assert().code(4);
}

// ==================== List ====================

#[test]
fn test_list_empty_book() {
    let book = empty_book();

    cb(&book)
        .arg("list")
        .assert()
        .success()
        .stdout("No commands saved\n");
}

#[test]
fn test_list_prefix_without_commands_shows_header() {
    let book = book_with("[commands.empty]\n");

    cb(&book)
        .args(["list", "--plain"])
        .assert()
        .success()
        .stdout("empty\n");
}

#[test]
fn test_list_plain_is_sorted_with_headers() {
    let book = standard_book();

    cb(&book)
        .args(["list", "--plain"])
        .assert()
        .success()
        .stdout("docker\n  ps: docker ps -a\ngit\n  lg: git log --oneline\n  st: git status\n");
}

#[test]
fn test_list_without_terminal_prints_plain() {
    let book = standard_book();

    cb(&book)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("docker\n"))
        .stdout(predicate::str::contains("Commands").not());
}

#[test]
fn test_list_json() {
    let book = standard_book();

    let output = cb(&book).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["git"]["st"], "git status");
    assert_eq!(value["docker"]["ps"], "docker ps -a");
}

#[test]
fn test_list_large_book() {
    let book = large_book(120);

    cb(&book)
        .args(["list", "--plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  c000: echo 0"))
        .stdout(predicate::str::contains("  c119: echo 119"));
}

#[test]
fn test_list_malformed_book() {
    let book = book_with("this is [not toml");

    cb(&book)
        .arg("list")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Failed to parse command book"));
}

// ==================== Exec ====================

#[test]
fn test_exec_runs_command() {
    let book = book_with("[commands.echo]\nhi = \"echo hello-from-cb\"\n");

    cb(&book)
        .args(["exec", "echo", "hi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello-from-cb"));
}

#[test]
fn test_exec_dry_run() {
    let book = standard_book();

    cb(&book)
        .args(["exec", "git", "st", "--dry-run"])
        .assert()
        .success()
        .stdout("Would run: git status\n");
}

#[cfg(unix)]
#[test]
fn test_exec_forwards_exit_code() {
    let book = book_with("[commands.sh]\nfail = \"exit 7\"\n");

    cb(&book).args(["exec", "sh", "fail"]).assert().code(7);
}

#[test]
fn test_exec_not_found() {
    let book = standard_book();

    cb(&book)
        .args(["exec", "git", "stt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Command not found: git/stt"))
        .stderr(predicate::str::contains("git/st"));
}

// ==================== Update ====================

#[test]
fn test_update_rename() {
    let book = standard_book();

    cb(&book)
        .args(["update", "git", "st", "--new-short", "status"])
        .assert()
        .success()
        .stdout("Updated: git st -> git status\n");

    let contents = book.contents();
    assert!(contents.contains("status = \"git status\""));
    assert!(!contents.contains("st = "));
}

#[test]
fn test_update_move_prunes_old_prefix() {
    let book = standard_book();

    cb(&book)
        .args(["update", "docker", "ps", "--new-prefix", "d"])
        .assert()
        .success()
        .stdout("Updated: docker ps -> d ps\n");

    let contents = book.contents();
    assert!(contents.contains("[commands.d]"));
    assert!(!contents.contains("[commands.docker]"));
}

#[test]
fn test_update_without_changes() {
    let book = standard_book();
    let before = book.contents();

    cb(&book)
        .args(["update", "git", "st"])
        .assert()
        .success()
        .stdout("No updates specified. Skipping command update.\n");

    assert_eq!(book.contents(), before);
}

#[test]
fn test_update_collision_leaves_book_unchanged() {
    let book = standard_book();
    let before = book.contents();

    cb(&book)
        .args(["update", "git", "st", "--new-short", "lg"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(book.contents(), before);
}

#[test]
fn test_update_missing_command() {
    let book = standard_book();

    cb(&book)
        .args(["update", "git", "nope", "--new-command", "true"])
        .assert()
        .code(2);
}

// ==================== Remove ====================

#[test]
fn test_remove_and_not_found() {
    let book = standard_book();

    cb(&book)
        .args(["remove", "docker", "ps"])
        .assert()
        .success()
        .stdout("Removed: docker/ps\n");

    assert!(!book.contents().contains("docker"));

    cb(&book)
        .args(["remove", "docker", "ps"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("docker/ps"));
}

// ==================== End to End ====================

#[test]
fn test_add_list_remove_exec_cycle() {
    let book = empty_book();

    cb(&book)
        .args(["add", "echo hi"])
        .assert()
        .success()
        .stdout("Added: echo cmd0 -> echo hi\n");

    cb(&book)
        .args(["list", "--plain"])
        .assert()
        .success()
        .stdout("echo\n  cmd0: echo hi\n");

    cb(&book)
        .args(["remove", "echo", "cmd0"])
        .assert()
        .success()
        .stdout("Removed: echo/cmd0\n");

    cb(&book)
        .arg("list")
        .assert()
        .success()
        .stdout("No commands saved\n");

    cb(&book)
        .args(["exec", "echo", "cmd0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("echo/cmd0"));
}

// ==================== Config ====================

#[test]
fn test_invalid_cli_config() {
    let book = empty_book();
    let config = book.write_config("[add\nbroken");

    cargo_bin_cmd!("cb")
        .arg("--book")
        .arg(book.arg())
        .arg("--config")
        .arg(&config)
        .arg("list")
        .assert()
        .code(6)
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn test_config_book_location() {
    let book = empty_book();
    let target = book.dir.path().join("from-config.toml");
    let config = book.write_config(&format!(
        "[general]\nbook = {:?}\n",
        target.to_str().unwrap()
    ));

    cargo_bin_cmd!("cb")
        .arg("--config")
        .arg(&config)
        .args(["add", "echo hi"])
        .assert()
        .success();

    assert!(target.exists());
}

// ==================== Completions ====================

#[test]
fn test_completions_bash() {
    cargo_bin_cmd!("cb")
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_cb"))
        .stdout(predicate::str::contains("cb complete line --"));
}

#[test]
fn test_completion_scripts_use_book() {
    for shell in ["zsh", "fish"] {
        cargo_bin_cmd!("cb")
            .args(["--completions", shell])
            .assert()
            .success()
            .stdout(predicate::str::contains("cb complete line --"));
    }

    cargo_bin_cmd!("cb")
        .args(["--completions", "powershell"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cb"));
}

#[test]
fn test_complete_line_lists_stored_keys() {
    let book = standard_book();

    cb(&book)
        .args(["complete", "line", "--", "exec", ""])
        .assert()
        .success()
        .stdout("docker\ngit\n");

    cb(&book)
        .args(["complete", "line", "--", "remove", "git", ""])
        .assert()
        .success()
        .stdout("lg\nst\n");

    cb(&book)
        .args(["complete", "line", "--", "add", "git push", "--prefix", "d"])
        .assert()
        .success()
        .stdout("docker\n");
}

#[test]
fn test_complete_line_follows_book_on_line() {
    let book = standard_book();
    let other = book_with("[commands.k8s]\npods = \"kubectl get pods\"\n");

    cb(&book)
        .args(["complete", "line", "--", "--book", other.arg(), "exec", ""])
        .assert()
        .success()
        .stdout("k8s\n");
}

#[test]
fn test_complete_prefixes_and_shorts() {
    let book = standard_book();

    cb(&book)
        .args(["complete", "prefixes"])
        .assert()
        .success()
        .stdout("docker\ngit\n");

    cb(&book)
        .args(["complete", "shorts", "git"])
        .assert()
        .success()
        .stdout("lg\nst\n");

    cb(&book)
        .args(["complete", "shorts", "nope"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_complete_tolerates_broken_book() {
    let book = book_with("not = [valid");

    cb(&book)
        .args(["complete", "prefixes"])
        .assert()
        .success()
        .stdout("");
}

// ==================== Debug ====================

#[test]
fn test_debug_prints_locations() {
    let book = standard_book();

    cb(&book)
        .args(["--debug", "list", "--plain"])
        .assert()
        .success()
        .stderr(predicate::str::contains("cb debug mode"))
        .stderr(predicate::str::contains("Command book:"));
}
