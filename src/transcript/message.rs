//! Chat message types and content-block normalization.
//!
//! Messages keep their `content` as raw JSON. Producers disagree about its
//! shape (a list of typed blocks, a bare string, occasionally something
//! else entirely), so normalization happens on read via
//! [`ChatMessage::blocks`] and never fails.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Author of a chat message.
///
/// Serialized as a plain lowercase string. Unrecognized roles are kept
/// verbatim in [`Role::Other`] rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    User,
    Assistant,
    System,
    Tool,
    Other(String),
}

impl Default for Role {
    fn default() -> Self {
        Role::Other(String::new())
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "user" => Role::User,
            "assistant" => Role::Assistant,
            "system" => Role::System,
            "tool" => Role::Tool,
            _ => Role::Other(value),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::User => "user".to_string(),
            Role::Assistant => "assistant".to_string(),
            Role::System => "system".to_string(),
            Role::Tool => "tool".to_string(),
            Role::Other(name) => name,
        }
    }
}

/// One message of a chat transcript.
///
/// Deserialization never rejects an object: fields of an unexpected type
/// fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawMessage")]
pub struct ChatMessage {
    /// Author role. Some producers name this key `type`.
    pub role: Role,
    /// Raw content payload; see [`ChatMessage::blocks`].
    pub content: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Untyped wire shape of a [`ChatMessage`].
///
/// `role` wins over `type` when both are present and `role` is a string.
#[derive(Deserialize)]
struct RawMessage {
    #[serde(default)]
    role: Option<Value>,
    #[serde(default, rename = "type")]
    kind: Option<Value>,
    #[serde(default)]
    content: Value,
    #[serde(default)]
    timestamp: Option<Value>,
    #[serde(default)]
    id: Option<Value>,
}

/// Epoch values above this are taken as milliseconds rather than seconds.
const EPOCH_MILLIS_THRESHOLD: i64 = 100_000_000_000;

impl From<RawMessage> for ChatMessage {
    fn from(raw: RawMessage) -> Self {
        let role = [raw.role, raw.kind]
            .into_iter()
            .flatten()
            .find_map(|value| match value {
                Value::String(name) => Some(Role::from(name)),
                _ => None,
            })
            .unwrap_or_default();

        Self {
            role,
            content: raw.content,
            timestamp: raw.timestamp.as_ref().and_then(parse_timestamp),
            id: raw.id.and_then(|value| match value {
                Value::String(id) => Some(id),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            }),
        }
    }
}

/// RFC 3339 strings, or epoch seconds/milliseconds as a number.
fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(text) => DateTime::parse_from_rfc3339(text)
            .ok()
            .map(|ts| ts.with_timezone(&Utc)),
        Value::Number(n) => {
            let epoch = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?;
            if epoch.abs() > EPOCH_MILLIS_THRESHOLD {
                DateTime::from_timestamp_millis(epoch)
            } else {
                DateTime::from_timestamp(epoch, 0)
            }
        }
        _ => None,
    }
}

impl ChatMessage {
    pub fn new(role: Role, content: Value) -> Self {
        Self {
            role,
            content,
            timestamp: None,
            id: None,
        }
    }

    pub fn assistant(content: Value) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn user(content: Value) -> Self {
        Self::new(Role::User, content)
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }

    /// Normalize the content payload into a sequence of blocks.
    ///
    /// - a JSON array is used as-is, each element parsed leniently
    /// - a string becomes a single [`ContentBlock::Text`]
    /// - anything else yields no blocks
    pub fn blocks(&self) -> Vec<ContentBlock> {
        match &self.content {
            Value::Array(items) => items.iter().map(ContentBlock::from_value).collect(),
            Value::String(text) => vec![ContentBlock::Text { text: text.clone() }],
            _ => Vec::new(),
        }
    }

    /// The tool invocation blocks of this message, in order.
    pub fn tool_uses(&self) -> Vec<ToolUseBlock> {
        self.blocks()
            .into_iter()
            .filter_map(|block| match block {
                ContentBlock::ToolUse(tool_use) => Some(tool_use),
                _ => None,
            })
            .collect()
    }
}

/// A request to perform a named action, embedded in an assistant message.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToolUseBlock {
    /// Invocation id. Empty when the producer omitted it.
    pub id: String,
    /// Action name. Empty when the producer omitted it.
    pub name: String,
    /// Parameter bag. Non-object inputs are replaced by an empty map.
    pub input: Map<String, Value>,
}

/// A typed element of a message's content.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Text { text: String },
    ToolUse(ToolUseBlock),
    ToolResult { tool_use_id: String, is_error: bool },
    /// Any other block kind (images, thinking, ...), or a non-object element.
    Other { kind: Option<String> },
}

impl ContentBlock {
    /// Parse one content element without failing.
    ///
    /// Missing string fields become empty strings; a block whose `type` is
    /// absent or unknown becomes [`ContentBlock::Other`].
    pub fn from_value(value: &Value) -> ContentBlock {
        let Some(obj) = value.as_object() else {
            return ContentBlock::Other { kind: None };
        };

        match obj.get("type").and_then(Value::as_str) {
            Some("text") => ContentBlock::Text {
                text: string_field(obj, "text"),
            },
            Some("tool_use") => ContentBlock::ToolUse(ToolUseBlock {
                id: string_field(obj, "id"),
                name: string_field(obj, "name"),
                input: obj
                    .get("input")
                    .and_then(Value::as_object)
                    .cloned()
                    .unwrap_or_default(),
            }),
            Some("tool_result") => ContentBlock::ToolResult {
                tool_use_id: string_field(obj, "tool_use_id"),
                is_error: obj
                    .get("is_error")
                    .and_then(Value::as_bool)
                    .unwrap_or(false),
            },
            other => ContentBlock::Other {
                kind: other.map(str::to_string),
            },
        }
    }
}

fn string_field(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn role_accepts_type_alias() {
        let msg: ChatMessage =
            serde_json::from_value(json!({"type": "assistant", "content": "hi"})).unwrap();
        assert_eq!(msg.role, Role::Assistant);
    }

    #[test]
    fn unknown_role_is_preserved() {
        let msg: ChatMessage =
            serde_json::from_value(json!({"role": "narrator", "content": "hi"})).unwrap();
        assert_eq!(msg.role, Role::Other("narrator".to_string()));
        assert!(!msg.is_assistant());
    }

    #[test]
    fn missing_role_and_content_default() {
        let msg: ChatMessage = serde_json::from_value(json!({})).unwrap();
        assert_eq!(msg.role, Role::Other(String::new()));
        assert!(msg.blocks().is_empty());
    }

    #[test]
    fn string_content_becomes_single_text_block() {
        let msg = ChatMessage::assistant(json!("plain answer"));
        assert_eq!(
            msg.blocks(),
            vec![ContentBlock::Text {
                text: "plain answer".to_string()
            }]
        );
    }

    #[test]
    fn object_and_number_content_yield_no_blocks() {
        assert!(ChatMessage::assistant(json!({"text": "x"})).blocks().is_empty());
        assert!(ChatMessage::assistant(json!(42)).blocks().is_empty());
    }

    #[test]
    fn tool_use_block_parses_leniently() {
        let msg = ChatMessage::assistant(json!([
            {"type": "tool_use", "name": "agent_spawn", "input": "not an object"},
            {"type": "tool_use", "id": "t2", "name": "swarm_init", "input": {"task": "go"}},
        ]));
        let uses = msg.tool_uses();
        assert_eq!(uses.len(), 2);
        assert_eq!(uses[0].id, "");
        assert!(uses[0].input.is_empty());
        assert_eq!(uses[1].id, "t2");
        assert_eq!(uses[1].input["task"], "go");
    }

    #[test]
    fn non_object_elements_become_other() {
        let msg = ChatMessage::assistant(json!([1, "text", {"type": "image"}]));
        assert_eq!(
            msg.blocks(),
            vec![
                ContentBlock::Other { kind: None },
                ContentBlock::Other { kind: None },
                ContentBlock::Other {
                    kind: Some("image".to_string())
                },
            ]
        );
    }

    #[test]
    fn tool_result_error_flag() {
        let msg = ChatMessage::user(json!([
            {"type": "tool_result", "tool_use_id": "t1", "is_error": true},
            {"type": "tool_result", "tool_use_id": "t2"},
        ]));
        assert_eq!(
            msg.blocks(),
            vec![
                ContentBlock::ToolResult {
                    tool_use_id: "t1".to_string(),
                    is_error: true
                },
                ContentBlock::ToolResult {
                    tool_use_id: "t2".to_string(),
                    is_error: false
                },
            ]
        );
    }

    #[test]
    fn role_key_wins_over_type() {
        let msg: ChatMessage = serde_json::from_value(
            json!({"role": "assistant", "type": "message", "content": "hi"}),
        )
        .unwrap();
        assert_eq!(msg.role, Role::Assistant);
    }

    #[test]
    fn non_string_role_falls_back_to_type() {
        let msg: ChatMessage =
            serde_json::from_value(json!({"role": 7, "type": "assistant"})).unwrap();
        assert_eq!(msg.role, Role::Assistant);

        let msg: ChatMessage = serde_json::from_value(json!({"role": null})).unwrap();
        assert_eq!(msg.role, Role::default());
    }

    #[test]
    fn numeric_and_string_ids() {
        let msg: ChatMessage = serde_json::from_value(json!({"id": 42})).unwrap();
        assert_eq!(msg.id.as_deref(), Some("42"));

        let msg: ChatMessage = serde_json::from_value(json!({"id": "m-1"})).unwrap();
        assert_eq!(msg.id.as_deref(), Some("m-1"));

        let msg: ChatMessage = serde_json::from_value(json!({"id": {"nested": true}})).unwrap();
        assert_eq!(msg.id, None);
    }

    #[test]
    fn unparseable_timestamp_becomes_none() {
        for ts in [json!("yesterday"), json!(true), json!([1, 2])] {
            let msg: ChatMessage =
                serde_json::from_value(json!({"role": "assistant", "timestamp": ts})).unwrap();
            assert!(msg.is_assistant());
            assert_eq!(msg.timestamp, None);
        }
    }

    #[test]
    fn timestamp_accepts_rfc3339_and_epoch() {
        let expected = DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);

        for ts in [
            json!("2024-05-01T12:00:00Z"),
            json!("2024-05-01T14:00:00+02:00"),
            json!(1_714_564_800),
            json!(1_714_564_800_000_i64),
        ] {
            let msg: ChatMessage = serde_json::from_value(json!({"timestamp": ts})).unwrap();
            assert_eq!(msg.timestamp, Some(expected), "for {ts}");
        }
    }

    #[test]
    fn serialized_message_reads_back() {
        let msg = ChatMessage::assistant(json!("done")).with_timestamp(
            DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        );
        let back: ChatMessage = serde_json::from_value(serde_json::to_value(&msg).unwrap()).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn role_serializes_as_plain_string() {
        let msg = ChatMessage::user(json!("hello"));
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["role"], "user");
        assert!(value.get("timestamp").is_none());
    }
}
