//! Tool-catalog and MCP wire types.

use serde::{Deserialize, Serialize};

/// Opaque identifier the platform assigns to a tool in its catalog.
pub type ToolId = String;

/// A platform-executed tool definition, uploaded at registration time.
///
/// The platform runs the source itself; this driver only ships it. The tool
/// name lives inside the JSON schema, matching the upsert contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDefinition {
    pub source_code: String,
    pub source_type: String,
    pub description: String,
    pub json_schema: serde_json::Value,
}

impl ToolDefinition {
    /// Tool name as declared in the JSON schema.
    pub fn name(&self) -> &str {
        self.json_schema
            .get("name")
            .and_then(|n| n.as_str())
            .unwrap_or_default()
    }
}

/// The subset of an attached-tool payload this driver uses.
#[derive(Debug, Clone, Deserialize)]
pub struct AttachedTool {
    pub id: ToolId,
    #[serde(default)]
    pub name: String,
}

/// Stdio MCP server registration payload (`PUT /v1/tools/mcp/servers`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct McpServerConfig {
    pub server_name: String,
    #[serde(rename = "type")]
    pub server_type: String,
    pub command: String,
    pub args: Vec<String>,
}

impl McpServerConfig {
    /// A server launched over stdio via a local command.
    pub fn stdio(server_name: &str, command: &str, args: Vec<String>) -> Self {
        Self {
            server_name: server_name.to_string(),
            server_type: "stdio".to_string(),
            command: command.to_string(),
            args,
        }
    }
}

/// One capability advertised by an MCP server.
#[derive(Debug, Clone, Deserialize)]
pub struct McpToolSchema {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "inputSchema")]
    pub input_schema: serde_json::Value,
}

/// Result of one tool-catalog registration attempt.
///
/// A duplicate reported by the platform is kept distinct from a genuine
/// failure so callers can tell "already configured" from "broken"; both
/// count as success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Registered,
    AlreadyRegistered,
    Failed { reason: String },
}

impl RegistrationOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failed { .. })
    }
}

impl std::fmt::Display for RegistrationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Registered => write!(f, "registered"),
            Self::AlreadyRegistered => write!(f, "already registered"),
            Self::Failed { reason } => write!(f, "failed: {reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tool_name_comes_from_schema() {
        let definition = ToolDefinition {
            source_code: "def lookup(): pass".into(),
            source_type: "python".into(),
            description: "lookup".into(),
            json_schema: json!({"name": "lookup", "parameters": {"type": "object"}}),
        };
        assert_eq!(definition.name(), "lookup");
    }

    #[test]
    fn stdio_server_config_serializes_type_tag() {
        let config = McpServerConfig::stdio("exa", "npx", vec!["-y".into()]);
        let body = serde_json::to_value(&config).unwrap();
        assert_eq!(body["type"], "stdio");
        assert_eq!(body["server_name"], "exa");
        assert_eq!(body["args"], json!(["-y"]));
    }

    #[test]
    fn duplicate_registration_counts_as_success() {
        assert!(RegistrationOutcome::Registered.is_success());
        assert!(RegistrationOutcome::AlreadyRegistered.is_success());
        assert!(!RegistrationOutcome::Failed {
            reason: "boom".into()
        }
        .is_success());
    }

    #[test]
    fn mcp_tool_schema_accepts_camel_case_input_schema() {
        let schema: McpToolSchema = serde_json::from_value(json!({
            "name": "web_search_exa",
            "description": "search the web",
            "inputSchema": {"type": "object"}
        }))
        .unwrap();
        assert_eq!(schema.name, "web_search_exa");
        assert_eq!(schema.input_schema["type"], "object");
    }
}
