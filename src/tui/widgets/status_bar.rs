//! Two-line status bar widget.
//!
//! - Line 1: swarm activity (colored), health gauge, agent and unread
//!   counters, and either the last refresh time or the last load error
//! - Line 2: keybind hints for the active tab

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::tui::app_state::{AppState, TAB_NOTIFICATIONS};
use crate::tui::widgets::health_gauge;

fn activity_span(is_active: bool) -> Span<'static> {
    let (label, color) = if is_active {
        (" ACTIVE", Color::Green)
    } else {
        (" IDLE", Color::DarkGray)
    };
    Span::styled(
        label,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

pub fn render_status_bar(state: &AppState, area: Rect, buf: &mut Buffer) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let sep = Span::styled(" | ", Style::default().fg(Color::DarkGray));
    let swarm = &state.snapshot.state;

    let mut line1_spans: Vec<Span<'static>> = vec![activity_span(swarm.is_active), sep.clone()];
    line1_spans.extend(health_gauge::render_health_gauge(&state.snapshot.health));
    line1_spans.push(sep.clone());
    line1_spans.push(Span::raw(format!(
        "Agents {}/{}",
        swarm.active_agents, swarm.total_agents
    )));
    line1_spans.push(sep.clone());
    line1_spans.push(Span::raw(format!(
        "Unread: {}",
        state.notifications.unread_count()
    )));
    line1_spans.push(sep.clone());

    match (&state.load_error, state.last_refresh) {
        (Some(err), _) => line1_spans.push(Span::styled(
            format!("Load failed: {err}"),
            Style::default().fg(Color::Red),
        )),
        (None, Some(at)) => line1_spans.push(Span::raw(format!(
            "{} ({} msgs) @ {}",
            state.source,
            state.snapshot.message_count,
            at.format("%H:%M:%S")
        ))),
        (None, None) => line1_spans.push(Span::styled(
            format!("{} (not loaded)", state.source),
            Style::default().fg(Color::DarkGray),
        )),
    }

    let hint_style = Style::default().fg(Color::DarkGray);
    let key_style = Style::default().fg(Color::White);
    let hint = |key: &'static str, action: &'static str| {
        [
            Span::styled(" | ", hint_style),
            Span::styled(key, key_style),
            Span::styled(action, hint_style),
        ]
    };

    let mut line2_spans = vec![
        Span::raw(" "),
        Span::styled("Tab", key_style),
        Span::styled(": switch tabs", hint_style),
    ];
    line2_spans.extend(hint("\u{2191}\u{2193}", ": select")); // "up/down arrows"
    if state.active_tab == TAB_NOTIFICATIONS {
        line2_spans.extend(hint("Enter", ": read"));
        line2_spans.extend(hint("m", ": read all"));
        line2_spans.extend(hint("d/D", ": dismiss/all"));
        line2_spans.extend(hint("u", ": unread only"));
    }
    line2_spans.extend(hint("r", ": reload"));
    line2_spans.extend(hint("q", ": quit"));

    Paragraph::new(vec![Line::from(line1_spans), Line::from(line2_spans)]).render(area, buf);
}
