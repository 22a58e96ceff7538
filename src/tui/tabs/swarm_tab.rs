//! Swarm tab rendering (Tab 1).
//!
//! Header with the swarm's activity and current operation, then the agent
//! roster on the left and the health panel on the right.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap};

use crate::dashboard::health::{Severity, SwarmHealth};
use crate::swarm::{Agent, AgentStatus, SwarmState};
use crate::tui::app_state::AppState;
use crate::tui::widgets::health_gauge;

pub fn render_swarm_tab(state: &AppState, area: Rect, buf: &mut Buffer) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let rows = Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).split(area);
    render_header(&state.snapshot.state, rows[0], buf);

    let columns =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).split(rows[1]);
    render_agents(&state.snapshot.state.agents, columns[0], buf);
    render_health(&state.snapshot.health, columns[1], buf);
}

fn render_header(swarm: &SwarmState, area: Rect, buf: &mut Buffer) {
    let block = Block::default().borders(Borders::ALL).title(" Swarm ");
    let inner = block.inner(area);
    block.render(area, buf);

    let headline = if swarm.is_active {
        Line::from(vec![
            Span::styled(
                "Swarm Orchestration Active",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" | ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!(
                "{} / {} agents active",
                swarm.active_agents, swarm.total_agents
            )),
        ])
    } else {
        Line::styled("No active swarm", Style::default().fg(Color::DarkGray))
    };

    let mut lines = vec![headline];
    if let Some(op) = &swarm.current_operation {
        lines.push(Line::from(vec![
            Span::styled("Operation: ", Style::default().fg(Color::DarkGray)),
            Span::raw(op.clone()),
        ]));
    }

    Paragraph::new(lines).render(inner, buf);
}

/// Indicator and color for an agent's status.
fn status_style(status: AgentStatus) -> (&'static str, Style) {
    match status {
        AgentStatus::Active => ("\u{25cf}", Style::default().fg(Color::Green)), // "●"
        AgentStatus::Idle => ("\u{25cb}", Style::default().fg(Color::Yellow)),  // "○"
        AgentStatus::Completed => ("\u{2713}", Style::default().fg(Color::Blue)), // "✓"
    }
}

fn render_agents(agents: &[Agent], area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Agents ({}) ", agents.len()));

    if agents.is_empty() {
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new("(No agents spawned yet)")
            .style(Style::default().fg(Color::DarkGray))
            .render(inner, buf);
        return;
    }

    let items: Vec<ListItem> = agents
        .iter()
        .map(|agent| {
            let (icon, style) = status_style(agent.status);
            let mut lines = vec![Line::from(vec![
                Span::styled(format!("{icon} "), style),
                Span::styled(agent.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!("  {}", agent.role), Style::default().fg(Color::Cyan)),
                Span::styled(format!("  [{}]", agent.status), style),
            ])];
            if let Some(task) = &agent.current_task {
                lines.push(Line::styled(
                    format!("    {task}"),
                    Style::default().fg(Color::Gray),
                ));
            }
            ListItem::new(lines)
        })
        .collect();

    Widget::render(List::new(items).block(block), area, buf);
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Low => Color::Gray,
        Severity::Medium => Color::Yellow,
        Severity::High => Color::Red,
    }
}

fn render_health(health: &SwarmHealth, area: Rect, buf: &mut Buffer) {
    let block = Block::default().borders(Borders::ALL).title(" Health ");
    let inner = block.inner(area);
    block.render(area, buf);

    let mut score_line = vec![Span::raw("Score ")];
    score_line.extend(health_gauge::render_health_gauge(health));
    score_line.push(Span::styled(
        format!("  {}", health.status),
        Style::default()
            .fg(health_gauge::status_color(health.status))
            .add_modifier(Modifier::BOLD),
    ));

    let m = &health.metrics;
    let dim = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(score_line),
        Line::default(),
        Line::from(vec![
            Span::styled("Response rate  ", dim),
            Span::raw(format!("{:.0}%", m.agent_response_rate)),
        ]),
        Line::from(vec![
            Span::styled("Error rate     ", dim),
            Span::raw(format!("{:.1}%", m.error_rate)),
        ]),
        Line::from(vec![
            Span::styled("Avg response   ", dim),
            Span::raw(format!("{}ms", m.avg_response_time_ms)),
        ]),
        Line::from(vec![
            Span::styled("Resources      ", dim),
            Span::raw(format!("{:.0}%", m.resource_usage)),
        ]),
    ];

    if !health.issues.is_empty() {
        lines.push(Line::default());
        for issue in &health.issues {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("[{}] ", issue.severity),
                    Style::default().fg(severity_color(issue.severity)),
                ),
                Span::raw(issue.message.clone()),
            ]));
        }
    }

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .render(inner, buf);
}
