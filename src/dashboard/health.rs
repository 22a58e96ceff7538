//! Swarm health scoring.
//!
//! A coarse 0-100 score derived from a [`SwarmState`]. There is no timing or
//! error telemetry in a transcript, so response time comes from config and
//! the error rate is always zero; only the agent response rate varies.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::swarm::SwarmState;

/// Inputs that a transcript cannot provide.
#[derive(Debug, Clone, Copy)]
pub struct HealthSettings {
    pub assumed_response_time_ms: u64,
}

impl Default for HealthSettings {
    fn default() -> Self {
        Self {
            assumed_response_time_ms: crate::config::merge::DEFAULT_RESPONSE_TIME_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Warning,
    Critical,
    Offline,
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            HealthStatus::Healthy => "Healthy",
            HealthStatus::Warning => "Warning",
            HealthStatus::Critical => "Critical",
            HealthStatus::Offline => "Offline",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Stable,
    Declining,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetrics {
    /// Percentage of tracked agents that are active (0-100).
    pub agent_response_rate: f64,
    /// Percentage of failed operations (0-100).
    pub error_rate: f64,
    pub avg_response_time_ms: u64,
    /// Estimated resource usage (0-80).
    pub resource_usage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthIssue {
    pub severity: Severity,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwarmHealth {
    /// Overall score, 0-100.
    pub score: f64,
    pub status: HealthStatus,
    pub metrics: HealthMetrics,
    pub issues: Vec<HealthIssue>,
    pub trend: Trend,
}

impl SwarmHealth {
    fn offline() -> Self {
        Self {
            score: 0.0,
            status: HealthStatus::Offline,
            metrics: HealthMetrics::default(),
            issues: Vec::new(),
            trend: Trend::Stable,
        }
    }
}

/// Score the health of a swarm snapshot.
///
/// `now` stamps any issues raised, keeping the function deterministic.
pub fn calculate_health(
    state: &SwarmState,
    settings: &HealthSettings,
    now: DateTime<Utc>,
) -> SwarmHealth {
    if !state.is_active {
        return SwarmHealth::offline();
    }

    let total = state.total_agents as f64;
    let active = state.active_agents as f64;

    let agent_response_rate = if state.total_agents > 0 {
        active / total * 100.0
    } else {
        100.0
    };
    let error_rate: f64 = 0.0;
    let avg_response_time_ms = settings.assumed_response_time_ms;
    let resource_usage = active / total.max(1.0) * 80.0;

    let mut score: f64 = 100.0;

    if agent_response_rate < 50.0 {
        score -= 30.0;
    } else if agent_response_rate < 75.0 {
        score -= 15.0;
    }

    score -= error_rate * 0.5;

    if avg_response_time_ms > 500 {
        score -= 20.0;
    } else if avg_response_time_ms > 300 {
        score -= 10.0;
    }

    let score = score.clamp(0.0, 100.0);

    let status = if score >= 80.0 {
        HealthStatus::Healthy
    } else if score >= 60.0 {
        HealthStatus::Warning
    } else {
        HealthStatus::Critical
    };

    let mut issues = Vec::new();
    if agent_response_rate < 75.0 {
        issues.push(HealthIssue {
            severity: if agent_response_rate < 50.0 {
                Severity::High
            } else {
                Severity::Medium
            },
            message: format!("Low agent response rate: {agent_response_rate:.0}%"),
            timestamp: now,
        });
    }
    if avg_response_time_ms > 300 {
        issues.push(HealthIssue {
            severity: if avg_response_time_ms > 500 {
                Severity::High
            } else {
                Severity::Medium
            },
            message: format!("High response time: {avg_response_time_ms}ms"),
            timestamp: now,
        });
    }

    SwarmHealth {
        score,
        status,
        metrics: HealthMetrics {
            agent_response_rate,
            error_rate,
            avg_response_time_ms,
            resource_usage,
        },
        issues,
        trend: Trend::Stable,
    }
}
