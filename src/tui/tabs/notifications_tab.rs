//! Notifications tab rendering (Tab 2).
//!
//! The filtered notification feed, newest first, with the selection
//! highlighted. Unread entries are marked with a dot.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget,
};

use crate::dashboard::notifications::{
    format_relative, NotificationFilter, NotificationSeverity, SwarmNotification,
};
use crate::tui::app_state::AppState;

pub fn render_notifications_tab(state: &AppState, area: Rect, buf: &mut Buffer) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let filter_label = match state.notification_filter {
        NotificationFilter::All => "All",
        NotificationFilter::Unread => "Unread",
    };
    let block = Block::default().borders(Borders::ALL).title(format!(
        " Notifications: {filter_label} ({} unread) ",
        state.notifications.unread_count()
    ));

    let visible = state.visible_notifications();
    if visible.is_empty() {
        let inner = block.inner(area);
        block.render(area, buf);
        let text = match state.notification_filter {
            NotificationFilter::All => "(No notifications yet)",
            NotificationFilter::Unread => "(No unread notifications)",
        };
        Paragraph::new(text)
            .style(Style::default().fg(Color::DarkGray))
            .render(inner, buf);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|n| notification_item(n, state))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(Some(state.selected_notification));
    StatefulWidget::render(list, area, buf, &mut list_state);
}

fn severity_color(severity: NotificationSeverity) -> Color {
    match severity {
        NotificationSeverity::Info => Color::Cyan,
        NotificationSeverity::Success => Color::Green,
        NotificationSeverity::Warning => Color::Yellow,
        NotificationSeverity::Error => Color::Red,
    }
}

fn notification_item<'a>(n: &SwarmNotification, state: &AppState) -> ListItem<'a> {
    let marker = if n.read { "  " } else { "\u{25cf} " }; // "●"
    let title_style = if n.read {
        Style::default().fg(severity_color(n.severity))
    } else {
        Style::default()
            .fg(severity_color(n.severity))
            .add_modifier(Modifier::BOLD)
    };

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(Color::Blue)),
        Span::styled(n.title.clone(), title_style),
        Span::raw(": "),
        Span::raw(n.message.clone()),
    ];
    if let Some(ts) = n.timestamp {
        spans.push(Span::styled(
            format!("  {}", format_relative(ts, state.now)),
            Style::default().fg(Color::DarkGray),
        ));
    }

    ListItem::new(Line::from(spans))
}
