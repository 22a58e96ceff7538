//! Top-level TUI render function.
//!
//! [`render_ui`] is the single entry point called each frame by the main loop.
//! It composes the tab bar, active tab content, and status bar into a complete
//! frame, dispatching on [`AppState::active_tab`].

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs, Widget};

use crate::tui::app_state::{AppState, TAB_NOTIFICATIONS, TAB_SWARM, TAB_TEMPLATES};
use crate::tui::tabs::{notifications_tab, swarm_tab, templates_tab};
use crate::tui::widgets::status_bar;

/// Tab titles, in tab index order.
const TAB_TITLES: &[&str] = &["Swarm", "Notifications", "Templates"];

/// Render the complete TUI from the current application state.
///
/// Layout (top to bottom): a one-line tab bar, the active tab's content,
/// and the two-line status bar. While `quit_pending` is set a confirmation
/// dialog overlays everything.
pub fn render_ui(state: &AppState, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .split(area);

    render_tab_bar(state, chunks[0], frame.buffer_mut());

    match state.active_tab {
        TAB_SWARM => swarm_tab::render_swarm_tab(state, chunks[1], frame.buffer_mut()),
        TAB_NOTIFICATIONS => {
            notifications_tab::render_notifications_tab(state, chunks[1], frame.buffer_mut())
        }
        TAB_TEMPLATES => templates_tab::render_templates_tab(state, chunks[1], frame.buffer_mut()),
        _ => {}
    }

    status_bar::render_status_bar(state, chunks[2], frame.buffer_mut());

    if state.quit_pending {
        render_quit_dialog(area, frame.buffer_mut());
    }
}

/// Render the tab bar, with the unread badge on the Notifications title.
fn render_tab_bar(state: &AppState, area: Rect, buf: &mut Buffer) {
    let badge = state.notifications.badge();
    let titles: Vec<Line<'_>> = TAB_TITLES
        .iter()
        .enumerate()
        .map(|(i, title)| match (&badge, i) {
            (Some(badge), TAB_NOTIFICATIONS) => Line::from(vec![
                Span::raw(*title),
                Span::styled(format!(" ({badge})"), Style::default().fg(Color::Red)),
            ]),
            _ => Line::from(*title),
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(state.active_tab)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(Span::styled("|", Style::default().fg(Color::DarkGray)));

    Widget::render(tabs, area, buf);
}

/// Render a centered quit confirmation dialog.
fn render_quit_dialog(area: Rect, buf: &mut Buffer) {
    let dialog_width: u16 = 24;
    let dialog_height: u16 = 3;

    let x = area.x + area.width.saturating_sub(dialog_width) / 2;
    let y = area.y + area.height.saturating_sub(dialog_height) / 2;
    let dialog_area = Rect::new(
        x,
        y,
        dialog_width.min(area.width),
        dialog_height.min(area.height),
    );

    Clear.render(dialog_area, buf);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Confirm ")
        .style(Style::default().fg(Color::Red));

    let inner = block.inner(dialog_area);
    block.render(dialog_area, buf);

    if inner.width > 0 && inner.height > 0 {
        let prompt = Paragraph::new(Line::from(vec![
            Span::raw("  Quit? ("),
            Span::styled(
                "y",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::raw("/"),
            Span::styled(
                "n",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw(")"),
        ]));
        prompt.render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use serde_json::json;

    use crate::dashboard::Snapshot;
    use crate::dashboard::health::HealthSettings;
    use crate::transcript::ChatMessage;

    fn render_to_string(state: &AppState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                render_ui(state, frame);
            })
            .unwrap();
        let buf = terminal.backend().buffer().clone();
        buf.content().iter().map(|c| c.symbol().to_string()).collect()
    }

    fn active_state() -> AppState {
        let messages = vec![ChatMessage::assistant(json!([
            {"type": "tool_use", "id": "t1", "name": "swarm_init", "input": {"task": "ship it"}},
            {"type": "tool_use", "id": "a1", "name": "agent_spawn",
             "input": {"agent_type": "coder", "role": "Backend"}},
        ]))];
        let mut state = AppState::new("t.jsonl");
        let now = Utc::now();
        state.apply_snapshot(
            Snapshot::derive(&messages, &HealthSettings::default(), now),
            now,
        );
        state
    }

    #[test]
    fn render_ui_default_state() {
        let state = AppState::new("t.jsonl");
        let content = render_to_string(&state, 100, 24);
        assert!(content.contains("Swarm"));
        assert!(content.contains("Notifications"));
        assert!(content.contains("Templates"));
        assert!(content.contains("No active swarm"));
    }

    #[test]
    fn render_ui_shows_unread_badge() {
        let state = active_state();
        let content = render_to_string(&state, 100, 24);
        assert!(content.contains("Notifications (2)"));
    }

    #[test]
    fn render_ui_swarm_tab_lists_agents() {
        let state = active_state();
        let content = render_to_string(&state, 100, 24);
        assert!(content.contains("Swarm Orchestration Active"));
        assert!(content.contains("coder"));
        assert!(content.contains("Backend"));
    }

    #[test]
    fn render_ui_notifications_tab() {
        let mut state = active_state();
        state.active_tab = TAB_NOTIFICATIONS;
        let content = render_to_string(&state, 100, 24);
        assert!(content.contains("Agent spawned"));
        assert!(content.contains("coder joined as Backend"));
    }

    #[test]
    fn render_ui_templates_tab() {
        let mut state = AppState::new("t.jsonl");
        state.active_tab = TAB_TEMPLATES;
        let content = render_to_string(&state, 120, 30);
        assert!(content.contains("Full-Stack Development"));
        assert!(content.contains("Bug Investigation"));
    }

    #[test]
    fn render_ui_quit_pending_shows_dialog() {
        let mut state = AppState::new("t.jsonl");
        state.quit_pending = true;
        let content = render_to_string(&state, 80, 24);
        assert!(content.contains("Quit?"));
        assert!(content.contains("Confirm"));
    }

    #[test]
    fn render_ui_tiny_terminal_does_not_panic() {
        let state = active_state();
        let _ = render_to_string(&state, 10, 4);
    }
}
