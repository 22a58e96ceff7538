//! Chat transcript model and file loading.
//!
//! [`message`] defines the message and content-block types consumed by the
//! swarm reducer; [`loader`] reads them from JSON or JSON Lines files.

pub mod loader;
pub mod message;

pub use loader::{load_transcript, parse_transcript};
pub use message::{ChatMessage, ContentBlock, Role, ToolUseBlock};
