//! Input handling for the viewer.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::utils::page_size_for_height;

use super::pager::Pager;

/// Handle a terminal event.
///
/// Returns `true` if the viewer should quit.
pub fn handle_event(pager: &mut Pager, event: Event) -> bool {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(pager, key),
        Event::Resize(_width, height) => {
            pager.set_page_size(page_size_for_height(height));
            false
        }
        _ => false,
    }
}

/// Handle a key press.
///
/// Navigation:
/// - ↑/k: scroll up
/// - ↓/j: scroll down
/// - PageUp/PageDown: scroll a page
/// - Home/g, End/G: jump to the ends
///
/// Quit: q, Esc, Ctrl+C
fn handle_key(pager: &mut Pager, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => pager.scroll_up(),
        KeyCode::Down | KeyCode::Char('j') => pager.scroll_down(),
        KeyCode::PageUp => pager.page_up(),
        KeyCode::PageDown => pager.page_down(),
        KeyCode::Home | KeyCode::Char('g') => pager.to_top(),
        KeyCode::End | KeyCode::Char('G') => pager.to_bottom(),
        KeyCode::Char('q') | KeyCode::Esc => return true,
        _ => {}
    }

    false
}
