//! Reads transcripts from disk.
//!
//! Two layouts are accepted: a single JSON array of messages, or JSON Lines
//! (one message object per line). The layout is picked from the first
//! non-whitespace character.

use std::path::Path;

use serde_json::Value;

use super::message::ChatMessage;
use crate::error::TranscriptError;

/// Load and parse a transcript file.
pub fn load_transcript(path: &Path) -> Result<Vec<ChatMessage>, TranscriptError> {
    let contents = std::fs::read_to_string(path).map_err(|source| TranscriptError::IoError {
        path: path.to_path_buf(),
        source,
    })?;

    let messages = parse_transcript(&contents, path)?;
    tracing::debug!(
        path = %path.display(),
        messages = messages.len(),
        "Transcript loaded"
    );
    Ok(messages)
}

/// Parse transcript text. `path` is only used for error messages.
///
/// Values that are valid JSON but not message objects are skipped with a
/// warning; invalid JSON is an error.
pub fn parse_transcript(contents: &str, path: &Path) -> Result<Vec<ChatMessage>, TranscriptError> {
    let trimmed = contents.trim_start();

    if trimmed.starts_with('[') {
        let values: Vec<Value> =
            serde_json::from_str(trimmed).map_err(|e| TranscriptError::InvalidJson {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        return Ok(values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| message_from_value(value, index + 1))
            .collect());
    }

    let mut messages = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let value: Value =
            serde_json::from_str(line).map_err(|e| TranscriptError::InvalidJsonLine {
                path: path.to_path_buf(),
                line: line_no,
                message: e.to_string(),
            })?;

        if let Some(message) = message_from_value(value, line_no) {
            messages.push(message);
        }
    }

    Ok(messages)
}

/// Convert one JSON value into a message, or skip it.
fn message_from_value(value: Value, position: usize) -> Option<ChatMessage> {
    if !value.is_object() {
        tracing::warn!(position, "Skipping transcript entry that is not an object");
        return None;
    }

    match serde_json::from_value::<ChatMessage>(value) {
        Ok(message) => Some(message),
        Err(e) => {
            tracing::warn!(position, error = %e, "Skipping malformed transcript entry");
            None
        }
    }
}
