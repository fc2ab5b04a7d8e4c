//! Scroll state for the interactive viewer.

use std::ops::Range;

/// Scroll position over a list of `total` rows shown `page_size` at a time.
///
/// The offset always stays within `0..=total - page_size` (or at 0 when
/// everything fits on one page).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    offset: usize,
    total: usize,
    page_size: usize,
}

impl Pager {
    /// Create a pager at the top of the list.
    pub fn new(total: usize, page_size: usize) -> Self {
        Self {
            offset: 0,
            total,
            page_size: page_size.max(1),
        }
    }

    /// First visible row.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of rows.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Largest valid offset.
    pub fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.page_size)
    }

    /// Indices of the rows on the current page.
    pub fn visible_range(&self) -> Range<usize> {
        self.offset..(self.offset + self.page_size).min(self.total)
    }

    /// Scroll up one row.
    pub fn scroll_up(&mut self) {
        if self.offset > 0 {
            self.offset -= 1;
        }
    }

    /// Scroll down one row.
    pub fn scroll_down(&mut self) {
        if self.offset < self.max_offset() {
            self.offset += 1;
        }
    }

    /// Scroll up one page.
    pub fn page_up(&mut self) {
        self.offset = self.offset.saturating_sub(self.page_size);
    }

    /// Scroll down one page.
    pub fn page_down(&mut self) {
        self.offset = (self.offset + self.page_size).min(self.max_offset());
    }

    /// Jump to the first row.
    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    /// Jump so the last row is on screen.
    pub fn to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Change the page size, keeping the offset in bounds.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.offset = self.offset.min(self.max_offset());
    }
}
