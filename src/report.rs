//! Plain-text and JSON output for the headless subcommands.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::dashboard::health::SwarmHealth;
use crate::dashboard::notifications::{format_relative, SwarmNotification};
use crate::dashboard::capabilities::AgentCapability;
use crate::dashboard::templates::SwarmTemplate;
use crate::swarm::{is_orchestration_tool, tool_label, SwarmState};

/// Result of classifying one tool name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolClassification {
    pub name: String,
    pub orchestration: bool,
    pub label: String,
}

impl ToolClassification {
    pub fn of(name: &str) -> Self {
        Self {
            name: name.to_string(),
            orchestration: is_orchestration_tool(name),
            label: tool_label(name),
        }
    }
}

/// Serialize `value` as pretty JSON, or fall back to the text renderer.
pub fn render<T: Serialize + ?Sized>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce() -> String,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Text => Ok(text()),
    }
}

pub fn state_text(state: &SwarmState) -> String {
    let mut out = String::new();

    if state.is_active {
        out.push_str("Swarm Orchestration Active\n");
    } else {
        out.push_str("Swarm inactive (no initialization seen)\n");
    }
    out.push_str(&format!(
        "Agents: {} / {} active\n",
        state.active_agents, state.total_agents
    ));
    if let Some(op) = &state.current_operation {
        out.push_str(&format!("Operation: {op}\n"));
    }

    for agent in &state.agents {
        out.push_str(&format!(
            "  [{}] {} - {} ({})",
            status_marker(agent.status),
            agent.name,
            agent.role,
            agent.status
        ));
        if let Some(task) = &agent.current_task {
            out.push_str(&format!(": {task}"));
        }
        out.push('\n');
    }

    out
}

fn status_marker(status: crate::swarm::AgentStatus) -> &'static str {
    match status {
        crate::swarm::AgentStatus::Active => "*",
        crate::swarm::AgentStatus::Idle => "-",
        crate::swarm::AgentStatus::Completed => "+",
    }
}

pub fn health_text(health: &SwarmHealth) -> String {
    let mut out = format!("Health: {:.0}/100 ({})\n", health.score, health.status);
    let m = &health.metrics;
    out.push_str(&format!(
        "  Response rate: {:.0}%\n  Error rate: {:.1}%\n  Avg response: {}ms\n  Resource usage: {:.0}%\n",
        m.agent_response_rate, m.error_rate, m.avg_response_time_ms, m.resource_usage
    ));

    if !health.issues.is_empty() {
        out.push_str("Issues:\n");
        for issue in &health.issues {
            out.push_str(&format!("  - [{}] {}\n", issue.severity, issue.message));
        }
    }

    out
}

/// One line per notification, newest first.
pub fn notifications_text(notifications: &[&SwarmNotification], now: DateTime<Utc>) -> String {
    if notifications.is_empty() {
        return "No notifications\n".to_string();
    }

    let mut out = String::new();
    for n in notifications {
        let when = n
            .timestamp
            .map(|ts| format!(" ({})", format_relative(ts, now)))
            .unwrap_or_default();
        out.push_str(&format!("{}: {}{}\n", n.title, n.message, when));
    }
    out
}

pub fn templates_text(templates: &[&SwarmTemplate]) -> String {
    if templates.is_empty() {
        return "No matching templates\n".to_string();
    }

    let mut out = String::new();
    for t in templates {
        out.push_str(&format!(
            "{:<16} {} ({} agents, {}, {})\n",
            t.id,
            t.name,
            t.agent_count(),
            t.estimated_duration,
            t.difficulty
        ));
    }
    out
}

pub fn capabilities_text(capabilities: &[&AgentCapability]) -> String {
    if capabilities.is_empty() {
        return "No matching capabilities\n".to_string();
    }

    let mut out = String::new();
    for c in capabilities {
        out.push_str(&format!(
            "{:<14} {:<22} [{}] {}\n",
            c.id, c.name, c.category, c.description
        ));
    }
    out
}

pub fn classifications_text(results: &[ToolClassification]) -> String {
    let mut out = String::new();
    for r in results {
        let verdict = if r.orchestration { "orchestration" } else { "other" };
        out.push_str(&format!("{}\t{}\t{}\n", r.name, verdict, r.label));
    }
    out
}
