//! Agent construction and memory-block wire types.

use serde::{Deserialize, Serialize};

use super::tool::ToolId;

/// One labeled memory block attached to the agent at creation time.
///
/// Identity is the label: the platform keeps at most one block per label per
/// agent, and blocks are mutated only by whole-value replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryBlockSpec {
    pub label: String,
    pub value: String,
    pub description: String,
}

impl MemoryBlockSpec {
    pub fn new(
        label: impl Into<String>,
        value: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            description: description.into(),
        }
    }
}

/// Request body for `POST /v1/agents`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateAgentRequest {
    pub name: String,
    pub description: String,
    pub model: String,
    pub embedding: String,
    pub memory_blocks: Vec<MemoryBlockSpec>,
    /// Tool names resolved by the platform (custom tools and builtins).
    pub tools: Vec<String>,
    /// Opaque ids of already-attached tools (the MCP search capabilities).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tool_ids: Vec<ToolId>,
}

/// The subset of the created-agent payload this driver uses.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentHandle {
    pub id: String,
    pub name: String,
}

/// A memory block as returned by the platform.
#[derive(Debug, Clone, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One message submitted with a task.
#[derive(Debug, Clone, Serialize)]
pub struct MessageCreate {
    pub role: String,
    pub content: String,
}

impl MessageCreate {
    /// A user-role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}
