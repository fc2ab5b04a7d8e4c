//! Display list construction and text formatting.

use crate::book::{CommandBook, CommandEntry};

/// Column width reserved for `short:` in command rows.
pub const SHORT_COLUMN_WIDTH: usize = 20;

/// Indent before command rows.
pub const ENTRY_INDENT: &str = "  ";

/// Flatten the book into the rows shown by the viewer.
///
/// Each prefix contributes one header followed by its commands, prefixes and
/// short names both in sorted order. A prefix without commands still
/// contributes its header.
pub fn build_display_list(book: &CommandBook) -> Vec<CommandEntry> {
    let mut entries = Vec::with_capacity(book.commands.len() + book.len());

    for (prefix, cmds) in &book.commands {
        entries.push(CommandEntry::header(prefix));
        entries.extend(
            cmds.iter()
                .map(|(short, command)| CommandEntry::new(prefix, short, command)),
        );
    }

    entries
}

/// Width left for the command text on a row of `width` columns.
pub fn command_width(width: u16) -> usize {
    usize::from(width).saturating_sub(SHORT_COLUMN_WIDTH + ENTRY_INDENT.len() + 2)
}

/// `short:` padded or truncated to [`SHORT_COLUMN_WIDTH`].
pub fn short_cell(short: &str) -> String {
    let label = truncate_string(&format!("{short}:"), SHORT_COLUMN_WIDTH);
    format!("{label:<SHORT_COLUMN_WIDTH$}")
}

/// Plain-text rows for non-interactive output.
///
/// Headers are printed as-is, commands as `  short: command`.
pub fn plain_lines(entries: &[CommandEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| {
            if entry.is_header() {
                entry.prefix.clone()
            } else {
                format!("{ENTRY_INDENT}{}: {}", entry.short, entry.command)
            }
        })
        .collect()
}

/// Footer text for a page that starts at `offset` and shows `printed` rows.
pub fn footer_text(offset: usize, printed: usize, total: usize) -> String {
    let end = (offset + printed).min(total);
    format!(
        "Commands {}-{} of {} (▲/▼ scroll, q quit)",
        offset + 1,
        end,
        total
    )
}

/// Truncate a string to a maximum length, adding ellipsis if needed.
/// Handles Unicode characters properly.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if max_len < 4 {
        return s.chars().take(max_len).collect();
    }

    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{truncated}...")
    }
}
