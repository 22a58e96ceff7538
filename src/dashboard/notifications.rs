//! Notification feed derived from orchestration events.
//!
//! [`derive_notifications`] rebuilds the whole feed from a transcript, the
//! same way the reducer rebuilds swarm state. [`NotificationCenter`] keeps
//! the user-owned part (read and dismissed ids) across those rebuilds.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::swarm::event::{CompletionKind, ToolEvent};
use crate::swarm::{is_orchestration_tool, tool_label};
use crate::transcript::{ChatMessage, ContentBlock, ToolUseBlock};

/// Badge text is capped at this count.
const BADGE_CAP: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    AgentSpawn,
    AgentComplete,
    SwarmInit,
    SwarmComplete,
    TaskOrchestrate,
    Error,
    Milestone,
    ApprovalNeeded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationSeverity {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwarmNotification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Timestamp of the message the event came from, when it has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    pub read: bool,
    pub severity: NotificationSeverity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
}

/// Build the notification feed for a transcript, in transcript order.
///
/// Assistant tool invocations recognized by the reducer each yield one
/// notification. A failed `tool_result` answering an orchestration call
/// yields an error notification.
pub fn derive_notifications(messages: &[ChatMessage]) -> Vec<SwarmNotification> {
    let mut feed = Vec::new();
    // tool_use id -> action name, for calls whose failures are worth reporting
    let mut orchestration_calls: HashMap<String, String> = HashMap::new();

    for (msg_index, message) in messages.iter().enumerate() {
        for (block_index, block) in message.blocks().into_iter().enumerate() {
            match block {
                ContentBlock::ToolUse(tool_use) if message.is_assistant() => {
                    let event = ToolEvent::from_block(&tool_use);
                    let recognized = !matches!(event, ToolEvent::Unrecognized);

                    if !tool_use.id.is_empty()
                        && (recognized || is_orchestration_tool(&tool_use.name))
                    {
                        orchestration_calls.insert(tool_use.id.clone(), tool_use.name.clone());
                    }

                    let id = notification_id(&tool_use, msg_index, block_index);
                    if let Some(notification) = notification_for(event, id, message.timestamp) {
                        feed.push(notification);
                    }
                }

                ContentBlock::ToolResult {
                    tool_use_id,
                    is_error: true,
                } if !message.is_assistant() => {
                    if let Some(name) = orchestration_calls.get(&tool_use_id) {
                        feed.push(SwarmNotification {
                            id: format!("{tool_use_id}:error"),
                            kind: NotificationKind::Error,
                            title: "Orchestration error".to_string(),
                            message: format!("{} failed", tool_label(name)),
                            timestamp: message.timestamp,
                            read: false,
                            severity: NotificationSeverity::Error,
                            agent_id: None,
                            agent_name: None,
                        });
                    }
                }

                _ => {}
            }
        }
    }

    feed
}

fn notification_id(tool_use: &ToolUseBlock, msg_index: usize, block_index: usize) -> String {
    if tool_use.id.is_empty() {
        format!("msg{msg_index}-block{block_index}")
    } else {
        tool_use.id.clone()
    }
}

fn notification_for(
    event: ToolEvent<'_>,
    id: String,
    timestamp: Option<DateTime<Utc>>,
) -> Option<SwarmNotification> {
    let base = |kind: NotificationKind,
                severity: NotificationSeverity,
                title: &str,
                message: String| SwarmNotification {
        id: id.clone(),
        kind,
        title: title.to_string(),
        message,
        timestamp,
        read: false,
        severity,
        agent_id: None,
        agent_name: None,
    };

    let notification = match event {
        ToolEvent::SwarmInit(params) => base(
            NotificationKind::SwarmInit,
            NotificationSeverity::Info,
            "Swarm initialized",
            params.operation_label(),
        ),
        ToolEvent::AgentSpawn(params) => SwarmNotification {
            agent_id: Some(params.id().to_string()),
            agent_name: Some(params.name().to_string()),
            ..base(
                NotificationKind::AgentSpawn,
                NotificationSeverity::Info,
                "Agent spawned",
                format!("{} joined as {}", params.name(), params.role()),
            )
        },
        ToolEvent::TaskOrchestrate(params) => base(
            NotificationKind::TaskOrchestrate,
            NotificationSeverity::Info,
            "Tasks orchestrated",
            params.operation_label(),
        ),
        ToolEvent::Complete(CompletionKind::Swarm) => base(
            NotificationKind::SwarmComplete,
            NotificationSeverity::Success,
            "Swarm complete",
            "Active agents finished their work".to_string(),
        ),
        ToolEvent::Complete(CompletionKind::Task) => base(
            NotificationKind::Milestone,
            NotificationSeverity::Success,
            "Task complete",
            "Active agents finished their work".to_string(),
        ),
        ToolEvent::Unrecognized => return None,
    };

    Some(notification)
}

/// Which notifications a view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationFilter {
    #[default]
    All,
    Unread,
}

impl NotificationFilter {
    pub fn toggle(self) -> Self {
        match self {
            NotificationFilter::All => NotificationFilter::Unread,
            NotificationFilter::Unread => NotificationFilter::All,
        }
    }
}

/// Notification feed plus the read/dismissed state the user has applied to it.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    items: Vec<SwarmNotification>,
    read: HashSet<String>,
    dismissed: HashSet<String>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the feed with a freshly derived one.
    ///
    /// Dismissed ids stay hidden and read ids stay read.
    pub fn sync(&mut self, derived: Vec<SwarmNotification>) {
        self.items = derived
            .into_iter()
            .filter(|n| !self.dismissed.contains(&n.id))
            .map(|mut n| {
                n.read = n.read || self.read.contains(&n.id);
                n
            })
            .collect();
    }

    /// All notifications not dismissed, in transcript order.
    pub fn notifications(&self) -> &[SwarmNotification] {
        &self.items
    }

    /// Notifications passing `filter`, newest first.
    pub fn visible(&self, filter: NotificationFilter) -> Vec<&SwarmNotification> {
        self.items
            .iter()
            .rev()
            .filter(|n| filter == NotificationFilter::All || !n.read)
            .collect()
    }

    /// Mark one notification read. Returns false if the id is unknown.
    pub fn mark_as_read(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                self.read.insert(n.id.clone());
                true
            }
            None => false,
        }
    }

    pub fn mark_all_as_read(&mut self) {
        for n in &mut self.items {
            n.read = true;
            self.read.insert(n.id.clone());
        }
    }

    /// Hide one notification, including from future syncs.
    pub fn dismiss(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        if self.items.len() == before {
            return false;
        }
        self.dismissed.insert(id.to_string());
        true
    }

    pub fn dismiss_all(&mut self) {
        for n in self.items.drain(..) {
            self.dismissed.insert(n.id);
        }
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Unread badge text: `None` when nothing is unread, capped at "9+".
    pub fn badge(&self) -> Option<String> {
        match self.unread_count() {
            0 => None,
            n if n > BADGE_CAP => Some(format!("{BADGE_CAP}+")),
            n => Some(n.to_string()),
        }
    }
}

/// Coarse relative time: "Just now", "5m ago", "3h ago", "2d ago".
///
/// Timestamps in the future read as "Just now".
pub fn format_relative(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - timestamp).num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes}m ago");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }

    format!("{}d ago", hours / 24)
}
