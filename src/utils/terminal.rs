//! Terminal utilities.

use std::io::{self, IsTerminal};

use crossterm::terminal;

/// Rows reserved below the page for the footer.
pub const FOOTER_HEIGHT: u16 = 2;

/// Page size used when the terminal is too short to hold one.
pub const FALLBACK_PAGE_SIZE: usize = 10;

/// Terminal size information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl TerminalSize {
    /// Number of entries that fit on one page.
    pub fn page_size(&self) -> usize {
        page_size_for_height(self.height)
    }
}

/// Check the terminal size.
///
/// Returns the current terminal size, or None if it cannot be determined.
pub fn check_terminal_size() -> Option<TerminalSize> {
    terminal::size()
        .ok()
        .map(|(width, height)| TerminalSize { width, height })
}

/// Number of entries that fit on a page of the given terminal height.
pub fn page_size_for_height(height: u16) -> usize {
    match height.checked_sub(FOOTER_HEIGHT) {
        Some(rows) if rows >= 1 => usize::from(rows),
        _ => FALLBACK_PAGE_SIZE,
    }
}

/// Whether both stdin and stdout are attached to a terminal.
pub fn is_interactive() -> bool {
    io::stdout().is_terminal() && io::stdin().is_terminal()
}
