//! Page rendering and the interactive viewer loop.

use std::io::{stdout, Stdout};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use crossterm::{
    cursor, event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
    Frame, Terminal,
};

use crate::book::CommandEntry;
use crate::utils::page_size_for_height;

use super::display::{command_width, footer_text, short_cell, truncate_string, ENTRY_INDENT};
use super::input::handle_event;
use super::pager::Pager;
use super::theme::Theme;

/// Global flag to track if terminal is in raw mode.
static TERMINAL_RAW_MODE: AtomicBool = AtomicBool::new(false);

/// RAII guard for terminal state.
/// Ensures terminal is properly restored even on panic.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    /// Create a new terminal guard, setting up the terminal for the viewer.
    pub fn new() -> Result<Self> {
        setup_panic_hook();

        enable_raw_mode().context("Failed to enable raw mode")?;
        TERMINAL_RAW_MODE.store(true, Ordering::SeqCst);

        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)
            .context("Failed to enter alternate screen")?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;

        Ok(Self { terminal })
    }

    /// Get a mutable reference to the terminal.
    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        TERMINAL_RAW_MODE.store(false, Ordering::SeqCst);
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        );
    }
}

/// Set up a panic hook that restores the terminal.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if TERMINAL_RAW_MODE.load(Ordering::SeqCst) {
            let _ = disable_raw_mode();
            let _ = execute!(stdout(), LeaveAlternateScreen, cursor::Show);
        }

        original_hook(panic_info);
    }));
}

/// Run the interactive viewer until the user quits.
pub fn run_viewer(entries: &[CommandEntry], theme: &Theme) -> Result<()> {
    let mut guard = TerminalGuard::new()?;

    let size = guard.terminal().size().context("Failed to read terminal size")?;
    let mut pager = Pager::new(entries.len(), page_size_for_height(size.height));

    let result = run_loop(guard.terminal(), entries, &mut pager, theme);

    // Guard restores the terminal on drop
    drop(guard);

    result
}

/// Blocking draw/read loop. Only a quit key ends it.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    entries: &[CommandEntry],
    pager: &mut Pager,
    theme: &Theme,
) -> Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, entries, pager, theme))?;

        let event = event::read().context("Failed to read key input")?;
        if handle_event(pager, event) {
            break;
        }
    }

    Ok(())
}

/// Draw one page and its footer.
fn draw(frame: &mut Frame, entries: &[CommandEntry], pager: &Pager, theme: &Theme) {
    let area = frame.area();
    let page_height = u16::try_from(pager.page_size())
        .unwrap_or(u16::MAX)
        .min(area.height);

    let page_area = Rect {
        height: page_height,
        ..area
    };
    let footer_area = Rect {
        y: area.y + page_height,
        height: area.height - page_height,
        ..area
    };

    let printed = render(entries, pager.offset(), page_area, frame.buffer_mut(), theme);
    render_footer(pager.offset(), printed, entries.len(), footer_area, frame.buffer_mut(), theme);
}

/// Render the entries starting at `offset` into `area`.
///
/// Clears the area first and draws at most `area.height` rows. Returns the
/// number of entries drawn.
pub fn render(
    entries: &[CommandEntry],
    offset: usize,
    area: Rect,
    buf: &mut Buffer,
    theme: &Theme,
) -> usize {
    Clear.render(area, buf);

    let lines: Vec<Line> = entries
        .iter()
        .skip(offset)
        .take(usize::from(area.height))
        .map(|entry| entry_line(entry, area.width, theme))
        .collect();

    let printed = lines.len();
    Paragraph::new(lines).render(area, buf);
    printed
}

/// Render the position footer below a page.
pub fn render_footer(
    offset: usize,
    printed: usize,
    total: usize,
    area: Rect,
    buf: &mut Buffer,
    theme: &Theme,
) {
    if area.height == 0 {
        return;
    }

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(footer_text(offset, printed, total), theme.footer())),
    ];
    Paragraph::new(lines).render(area, buf);
}

/// One display row.
fn entry_line<'a>(entry: &'a CommandEntry, width: u16, theme: &Theme) -> Line<'a> {
    if entry.is_header() {
        return Line::from(Span::styled(entry.prefix.as_str(), theme.header()));
    }

    Line::from(vec![
        Span::raw(ENTRY_INDENT),
        Span::styled(short_cell(&entry.short), theme.short()),
        Span::raw(" "),
        Span::styled(
            truncate_string(&entry.command, command_width(width)),
            theme.command(),
        ),
    ])
}
