//! Streamed response events.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A tool invocation surfaced on the response stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallRecord {
    pub name: String,
    /// Parsed arguments. The platform may ship these as a JSON-encoded
    /// string; they are decoded here so consumers see structured values.
    pub arguments: serde_json::Value,
}

/// One unit of the ordered response stream, dispatched by `message_type`.
///
/// Consumed once, in arrival order. Event types this driver does not render
/// land in `Unknown` rather than failing the stream.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamedEvent {
    /// Internal reasoning emitted while the agent works.
    Reasoning(String),
    /// The agent invoking a tool.
    ToolCall(ToolCallRecord),
    /// A message addressed to the human.
    Assistant(String),
    /// Any event type outside the rendered set.
    Unknown { message_type: String },
}

impl StreamedEvent {
    /// Decode one SSE data payload.
    pub fn from_json(data: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(data)?;
        Ok(Self::from_value(&value))
    }

    /// Dispatch on the `message_type` tag of a decoded event.
    pub fn from_value(value: &serde_json::Value) -> Self {
        let message_type = value
            .get("message_type")
            .and_then(|t| t.as_str())
            .unwrap_or_default();

        match message_type {
            "reasoning" => Self::Reasoning(
                value
                    .get("reasoning")
                    .and_then(|r| r.as_str())
                    .unwrap_or_default()
                    .to_string(),
            ),
            "tool_call_message" => {
                let tool_call = value.get("tool_call");
                Self::ToolCall(ToolCallRecord {
                    name: tool_call
                        .and_then(|c| c.get("name"))
                        .and_then(|n| n.as_str())
                        .unwrap_or_default()
                        .to_string(),
                    arguments: parse_arguments(tool_call.and_then(|c| c.get("arguments"))),
                })
            }
            "assistant_message" => Self::Assistant(extract_content(value.get("content"))),
            other => Self::Unknown {
                message_type: other.to_string(),
            },
        }
    }
}

/// Arguments arrive either as a JSON object or a JSON-encoded string.
fn parse_arguments(raw: Option<&serde_json::Value>) -> serde_json::Value {
    match raw {
        Some(serde_json::Value::String(s)) => {
            serde_json::from_str(s).unwrap_or_else(|_| serde_json::Value::String(s.clone()))
        }
        Some(value) => value.clone(),
        None => serde_json::Value::Null,
    }
}

/// Assistant content is a plain string or a list of text parts.
fn extract_content(content: Option<&serde_json::Value>) -> String {
    match content {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Array(parts)) => parts
            .iter()
            .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
            .collect::<Vec<_>>()
            .join(""),
        _ => String::new(),
    }
}
