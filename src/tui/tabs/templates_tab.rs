//! Templates tab rendering (Tab 3).
//!
//! Catalog list on the left; details and the launch prompt for the
//! selected template on the right.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap,
};

use crate::dashboard::templates::{self, Difficulty, SwarmTemplate};
use crate::tui::app_state::AppState;

pub fn render_templates_tab(state: &AppState, area: Rect, buf: &mut Buffer) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let columns =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).split(area);

    let items: Vec<ListItem> = templates::catalog()
        .iter()
        .map(|t| {
            ListItem::new(Line::from(vec![
                Span::raw(t.name),
                Span::styled(
                    format!("  {} agents", t.agent_count()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Templates "))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(Some(state.selected_template));
    StatefulWidget::render(list, columns[0], buf, &mut list_state);

    if let Some(template) = state.selected_template() {
        render_details(template, columns[1], buf);
    }
}

fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Beginner => Color::Green,
        Difficulty::Intermediate => Color::Yellow,
        Difficulty::Advanced => Color::Red,
    }
}

fn render_details(template: &SwarmTemplate, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", template.id));
    let inner = block.inner(area);
    block.render(area, buf);

    let dim = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::styled(template.name, Style::default().add_modifier(Modifier::BOLD)),
        Line::raw(template.description),
        Line::default(),
        Line::from(vec![
            Span::styled("Duration: ", dim),
            Span::raw(template.estimated_duration),
            Span::styled("  Difficulty: ", dim),
            Span::styled(
                template.difficulty.to_string(),
                Style::default().fg(difficulty_color(template.difficulty)),
            ),
        ]),
        Line::from(vec![
            Span::styled("Tags: ", dim),
            Span::raw(template.tags.join(", ")),
        ]),
        Line::default(),
        Line::styled("Agents", Style::default().add_modifier(Modifier::UNDERLINED)),
    ];

    for agent in template.agents {
        lines.push(Line::from(vec![
            Span::styled(agent.role, Style::default().fg(Color::Cyan)),
            Span::styled(format!(" ({})", agent.agent_type), dim),
            Span::raw(format!(": {}", agent.task)),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::styled(
        "Launch with: swarmscope templates --id <id> --prompt",
        dim,
    ));

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .render(inner, buf);
}
