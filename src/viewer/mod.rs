//! Viewer module for cmdbook.
//!
//! Turns the command book into display rows and pages through them in the
//! terminal.

mod display;
mod input;
mod pager;
mod theme;
mod ui;

pub use display::{
    build_display_list, footer_text, plain_lines, truncate_string, SHORT_COLUMN_WIDTH,
};
pub use input::handle_event;
pub use pager::Pager;
pub use theme::Theme;
pub use ui::{render, render_footer, run_viewer, TerminalGuard};
