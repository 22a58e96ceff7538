//! Swarm state derivation.
//!
//! [`reduce`] turns a chat transcript into a [`SwarmState`] snapshot;
//! [`event`] gives typed access to the orchestration tool calls it reads,
//! and [`tools`] classifies and labels tool names for display.

pub mod event;
pub mod reducer;
pub mod tools;
pub mod types;

pub use reducer::reduce;
pub use tools::{is_orchestration_tool, tool_label};
pub use types::{Agent, AgentId, AgentStatus, SwarmState};
