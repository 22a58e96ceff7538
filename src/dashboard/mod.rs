//! Consumers of the derived swarm state.
//!
//! [`health`] scores a snapshot, [`notifications`] turns orchestration
//! events into a feed, [`templates`] holds the built-in swarm layouts, and
//! [`capabilities`] lists the kinds of work an agent can be given.
//! [`Snapshot`] bundles one full derivation so the CLI and TUI compute
//! everything from the same pass over the transcript.

pub mod capabilities;
pub mod health;
pub mod notifications;
pub mod templates;

use chrono::{DateTime, Utc};

use crate::swarm::{reduce, SwarmState};
use crate::transcript::ChatMessage;
use health::{calculate_health, HealthSettings, SwarmHealth};
use notifications::{derive_notifications, SwarmNotification};

/// Everything the dashboard shows for one transcript version.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub state: SwarmState,
    pub health: SwarmHealth,
    pub notifications: Vec<SwarmNotification>,
    /// Number of messages the snapshot was derived from.
    pub message_count: usize,
}

impl Snapshot {
    /// Derive state, health, and notifications from scratch.
    pub fn derive(messages: &[ChatMessage], settings: &HealthSettings, now: DateTime<Utc>) -> Self {
        let state = reduce(messages);
        let health = calculate_health(&state, settings, now);
        let notifications = derive_notifications(messages);

        tracing::debug!(
            messages = messages.len(),
            agents = state.total_agents,
            active = state.active_agents,
            notifications = notifications.len(),
            "Snapshot derived"
        );

        Self {
            state,
            health,
            notifications,
            message_count: messages.len(),
        }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::derive(&[], &HealthSettings::default(), Utc::now())
    }
}
