//! Transcript-to-state reducer.
//!
//! [`reduce`] folds a full message list into a [`SwarmState`]. Every call is
//! a complete rescan from the first message: there is no incremental mode,
//! and nothing survives between calls except the returned snapshot.

use std::collections::HashMap;

use super::event::{AgentDirective, ToolEvent};
use super::types::{Agent, AgentStatus, SwarmState};
use crate::transcript::ChatMessage;

/// Insertion-ordered agent map local to one reduction pass.
///
/// Overwriting an id keeps the agent at its first-seen position.
#[derive(Debug, Default)]
struct AgentRoster {
    agents: Vec<Agent>,
    index: HashMap<String, usize>,
}

impl AgentRoster {
    fn upsert(&mut self, agent: Agent) {
        match self.index.get(&agent.id) {
            Some(&pos) => self.agents[pos] = agent,
            None => {
                self.index.insert(agent.id.clone(), self.agents.len());
                self.agents.push(agent);
            }
        }
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Agent> {
        let pos = *self.index.get(id)?;
        self.agents.get_mut(pos)
    }

    fn complete_active(&mut self) {
        for agent in &mut self.agents {
            if agent.status == AgentStatus::Active {
                agent.status = AgentStatus::Completed;
            }
        }
    }

    fn into_agents(self) -> Vec<Agent> {
        self.agents
    }
}

/// Scan state carried across one pass.
#[derive(Debug, Default)]
struct Scan {
    is_active: bool,
    current_operation: Option<String>,
    roster: AgentRoster,
}

impl Scan {
    fn apply(&mut self, event: ToolEvent<'_>) {
        match event {
            ToolEvent::SwarmInit(params) => {
                self.is_active = true;
                self.current_operation = Some(params.operation_label());
            }

            ToolEvent::AgentSpawn(params) => {
                self.roster.upsert(Agent {
                    id: params.id().to_string(),
                    name: params.name().to_string(),
                    role: params.role().to_string(),
                    status: AgentStatus::Active,
                    current_task: params.task().map(str::to_string),
                });
            }

            ToolEvent::TaskOrchestrate(params) => {
                self.current_operation = Some(params.operation_label());
                for directive in params.directives() {
                    self.apply_directive(directive);
                }
            }

            ToolEvent::Complete(_) => self.roster.complete_active(),

            ToolEvent::Unrecognized => {}
        }
    }

    /// Reassign a tracked agent. Directives for unknown ids are dropped.
    fn apply_directive(&mut self, directive: AgentDirective<'_>) {
        let Some(agent_id) = directive.agent_id else {
            return;
        };
        match self.roster.get_mut(agent_id) {
            Some(agent) => {
                agent.current_task = directive.task.map(str::to_string);
                agent.status = AgentStatus::Active;
            }
            None => {
                tracing::trace!(agent_id, "Dropping directive for untracked agent");
            }
        }
    }

    fn finish(self) -> SwarmState {
        let mut state = SwarmState {
            is_active: self.is_active,
            current_operation: self.current_operation,
            agents: self.roster.into_agents(),
            ..SwarmState::default()
        };
        state.total_agents = state.agents.len();
        state.active_agents = state.count_with_status(AgentStatus::Active);
        state
    }
}

/// Derive the swarm snapshot described by a transcript.
///
/// Only assistant messages are inspected, and within them only tool
/// invocation blocks. Events apply in transcript order. The function is
/// pure: the same messages always produce the same snapshot.
pub fn reduce(messages: &[ChatMessage]) -> SwarmState {
    let mut scan = Scan::default();

    for message in messages.iter().filter(|m| m.is_assistant()) {
        for block in message.tool_uses() {
            scan.apply(ToolEvent::from_block(&block));
        }
    }

    scan.finish()
}
