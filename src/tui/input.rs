//! Keyboard event handler for the dashboard.
//!
//! Maps key events to [`AppState`] mutations. Called by the main loop in
//! [`super::runner`] whenever a keyboard event arrives from the crossterm
//! `EventStream`.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::{AppState, TAB_COUNT, TAB_NOTIFICATIONS};

/// Process a keyboard event, mutating app state.
///
/// Returns `true` if the application should exit (confirmed quit or Ctrl+C).
///
/// Only `KeyEventKind::Press` events are processed. This avoids duplicate handling
/// on Windows where key-up events would otherwise trigger actions twice.
pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }

    // Ctrl+C quits from anywhere, including the confirm dialog.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if state.quit_pending {
        return match key.code {
            KeyCode::Char('q') | KeyCode::Char('y') => true,
            _ => {
                // Anything else cancels.
                state.quit_pending = false;
                false
            }
        };
    }

    match key.code {
        KeyCode::Tab => {
            state.active_tab = (state.active_tab + 1) % TAB_COUNT;
        }
        KeyCode::BackTab => {
            state.active_tab = (state.active_tab + TAB_COUNT - 1) % TAB_COUNT;
        }
        KeyCode::Up => state.select_previous(),
        KeyCode::Down => state.select_next(),
        KeyCode::Char('r') => {
            state.refresh_requested = true;
        }
        KeyCode::Char('q') => {
            state.quit_pending = true;
        }
        code if state.active_tab == TAB_NOTIFICATIONS => handle_notification_key(code, state),
        _ => {}
    }

    false
}

/// Keys that only mean something on the Notifications tab.
fn handle_notification_key(code: KeyCode, state: &mut AppState) {
    match code {
        KeyCode::Enter => state.mark_selected_read(),
        KeyCode::Char('m') => state.mark_all_read(),
        KeyCode::Char('d') => state.dismiss_selected(),
        KeyCode::Char('D') => state.dismiss_all(),
        KeyCode::Char('u') => state.toggle_notification_filter(),
        _ => {}
    }
}
