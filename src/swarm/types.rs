//! Type definitions for derived swarm state.
//!
//! These types are the output vocabulary of the reducer and the input of
//! every consumer (reports, health scoring, the dashboard). They serialize
//! with camelCase keys so JSON output matches what web consumers expect.

use serde::{Deserialize, Serialize};

/// Identifier of a tracked agent: the id of the tool invocation that spawned it.
pub type AgentId = String;

/// Lifecycle status of a tracked agent.
///
/// No orchestration event currently produces `Idle`; it is kept because
/// consumers filter on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Active,
    Idle,
    Completed,
}

impl std::fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AgentStatus::Active => "active",
            AgentStatus::Idle => "idle",
            AgentStatus::Completed => "completed",
        };
        f.write_str(label)
    }
}

/// A worker entity tracked across one reduction pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: AgentId,
    /// Display label (the spawn event's `agent_type`).
    pub name: String,
    pub role: String,
    pub status: AgentStatus,
    /// Free-text description of in-progress work, overwritten on each update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_task: Option<String>,
}

/// Point-in-time snapshot of a swarm, produced by [`super::reduce`].
///
/// `total_agents` and `active_agents` are always derived from `agents`;
/// they are stored rather than computed so the serialized form carries them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwarmState {
    /// True once any initialization event was seen in the scanned transcript.
    pub is_active: bool,
    pub total_agents: usize,
    pub active_agents: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_operation: Option<String>,
    /// Agents in first-seen order.
    pub agents: Vec<Agent>,
}

impl SwarmState {
    /// Number of agents with the given status.
    pub fn count_with_status(&self, status: AgentStatus) -> usize {
        self.agents.iter().filter(|a| a.status == status).count()
    }
}
