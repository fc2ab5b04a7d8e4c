//! Command book persistence.
//!
//! The book is read and written as a whole. Saving replaces the file through a
//! sibling temporary file so a failed write never leaves a truncated book.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{CbError, Result};

use super::types::CommandBook;

/// Load the command book from `path`.
///
/// A missing file is an empty book.
///
/// # Errors
///
/// Returns an IO error if the file cannot be read (including when `path` is a
/// directory) and a parse error if it is not a valid command book.
pub fn load(path: &Path) -> Result<CommandBook> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No command book at {}, starting empty", path.display());
            return Ok(CommandBook::new());
        }
        Err(source) => {
            return Err(CbError::Io {
                operation: "read",
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let book: CommandBook = toml::from_str(&content).map_err(|e| CbError::Parse {
        path: path.to_path_buf(),
        message: e.to_string().trim_end().to_string(),
    })?;

    debug!(
        "Loaded {} commands under {} prefixes from {}",
        book.len(),
        book.commands.len(),
        path.display()
    );

    Ok(book)
}

/// Save the command book to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns a serialize error if the book cannot be encoded and an IO error if
/// the file cannot be written.
pub fn save(book: &CommandBook, path: &Path) -> Result<()> {
    let content = toml::to_string(book)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| CbError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let tmp = temp_path(path);
    fs::write(&tmp, content).map_err(|source| CbError::Io {
        operation: "write",
        path: tmp.clone(),
        source,
    })?;

    if let Err(source) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(CbError::Io {
            operation: "write",
            path: path.to_path_buf(),
            source,
        });
    }

    debug!("Saved {} commands to {}", book.len(), path.display());
    Ok(())
}

/// Sibling temporary file used while saving.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "cmdbook".into());
    name.push(".tmp");
    path.with_file_name(name)
}
