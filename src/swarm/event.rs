//! Typed views over orchestration tool invocations.
//!
//! A [`ToolUseBlock`] carries an untyped parameter bag. [`ToolEvent`] turns
//! the recognized action names into variants, each with named accessors
//! that apply the fallback defaults in one place. Missing or mistyped
//! parameters never fail; they fall back.

use serde_json::{Map, Value};

use crate::transcript::ToolUseBlock;

/// `current_operation` label when an init event carries no task.
pub const DEFAULT_INIT_OPERATION: &str = "Initializing swarm";
/// Agent name when a spawn event carries no `agent_type`.
pub const DEFAULT_AGENT_NAME: &str = "Agent";
/// Agent role when a spawn event carries neither `role` nor `agent_type`.
pub const DEFAULT_AGENT_ROLE: &str = "Worker";
/// Task phrase used in the orchestration label when `task` is absent.
pub const DEFAULT_ORCHESTRATE_TASK: &str = "multiple tasks";

/// Which completion action was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionKind {
    Swarm,
    Task,
}

/// One orchestration-relevant action extracted from a tool invocation.
#[derive(Debug, Clone, Copy)]
pub enum ToolEvent<'a> {
    /// `swarm_init` or `hive_mind_spawn`.
    SwarmInit(InitParams<'a>),
    /// `agent_spawn`.
    AgentSpawn(SpawnParams<'a>),
    /// `task_orchestrate`.
    TaskOrchestrate(OrchestrateParams<'a>),
    /// `swarm_complete` or `task_complete`.
    Complete(CompletionKind),
    /// Any other action name.
    Unrecognized,
}

impl<'a> ToolEvent<'a> {
    /// Classify a tool invocation by its action name.
    pub fn from_block(block: &'a ToolUseBlock) -> ToolEvent<'a> {
        let input = &block.input;
        match block.name.as_str() {
            "swarm_init" | "hive_mind_spawn" => ToolEvent::SwarmInit(InitParams { input }),
            "agent_spawn" => ToolEvent::AgentSpawn(SpawnParams {
                id: &block.id,
                input,
            }),
            "task_orchestrate" => ToolEvent::TaskOrchestrate(OrchestrateParams { input }),
            "swarm_complete" => ToolEvent::Complete(CompletionKind::Swarm),
            "task_complete" => ToolEvent::Complete(CompletionKind::Task),
            _ => ToolEvent::Unrecognized,
        }
    }
}

/// Parameters of a swarm initialization.
#[derive(Debug, Clone, Copy)]
pub struct InitParams<'a> {
    input: &'a Map<String, Value>,
}

impl<'a> InitParams<'a> {
    pub fn task(&self) -> Option<&'a str> {
        non_empty_param(self.input, "task")
    }

    /// The task, or [`DEFAULT_INIT_OPERATION`].
    pub fn operation_label(&self) -> String {
        self.task().unwrap_or(DEFAULT_INIT_OPERATION).to_string()
    }
}

/// Parameters of an agent spawn.
#[derive(Debug, Clone, Copy)]
pub struct SpawnParams<'a> {
    id: &'a str,
    input: &'a Map<String, Value>,
}

impl<'a> SpawnParams<'a> {
    /// The invocation's own id, which becomes the agent id.
    pub fn id(&self) -> &'a str {
        self.id
    }

    pub fn agent_type(&self) -> Option<&'a str> {
        non_empty_param(self.input, "agent_type")
    }

    /// `agent_type`, or [`DEFAULT_AGENT_NAME`].
    pub fn name(&self) -> &'a str {
        self.agent_type().unwrap_or(DEFAULT_AGENT_NAME)
    }

    /// `role`, else `agent_type`, else [`DEFAULT_AGENT_ROLE`].
    pub fn role(&self) -> &'a str {
        non_empty_param(self.input, "role")
            .or_else(|| self.agent_type())
            .unwrap_or(DEFAULT_AGENT_ROLE)
    }

    pub fn task(&self) -> Option<&'a str> {
        str_param(self.input, "task")
    }
}

/// Parameters of a task orchestration directive.
#[derive(Debug, Clone, Copy)]
pub struct OrchestrateParams<'a> {
    input: &'a Map<String, Value>,
}

impl<'a> OrchestrateParams<'a> {
    pub fn task(&self) -> Option<&'a str> {
        non_empty_param(self.input, "task")
    }

    /// `"Orchestrating: {task}"`, with [`DEFAULT_ORCHESTRATE_TASK`] as the fallback task.
    pub fn operation_label(&self) -> String {
        format!(
            "Orchestrating: {}",
            self.task().unwrap_or(DEFAULT_ORCHESTRATE_TASK)
        )
    }

    /// Per-agent directives from the `agents` parameter.
    ///
    /// Empty when `agents` is absent or not an array. Non-object entries
    /// yield directives with no agent reference.
    pub fn directives(&self) -> Vec<AgentDirective<'a>> {
        let Some(entries) = self.input.get("agents").and_then(Value::as_array) else {
            return Vec::new();
        };

        entries
            .iter()
            .map(|entry| match entry.as_object() {
                Some(obj) => AgentDirective {
                    agent_id: non_empty_param(obj, "agent_id")
                        .or_else(|| non_empty_param(obj, "id")),
                    task: str_param(obj, "task"),
                },
                None => AgentDirective {
                    agent_id: None,
                    task: None,
                },
            })
            .collect()
    }
}

/// One entry of a `task_orchestrate` event's `agents` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentDirective<'a> {
    /// `agent_id`, falling back to `id`.
    pub agent_id: Option<&'a str>,
    /// New task for the agent. `None` clears the agent's current task.
    pub task: Option<&'a str>,
}

/// A string parameter, including the empty string.
fn str_param<'a>(input: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    input.get(key).and_then(Value::as_str)
}

/// A string parameter, treating the empty string as absent.
fn non_empty_param<'a>(input: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    str_param(input, key).filter(|s| !s.is_empty())
}
