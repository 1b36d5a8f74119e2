//! Tool-catalog and MCP endpoints.

use reqwest::Method;
use tracing::debug;

use crate::error::Result;
use crate::types::{AttachedTool, McpServerConfig, McpToolSchema, ToolDefinition};

use super::{http, LettaClient};

impl LettaClient {
    /// Upsert a platform-executed tool (`PUT /v1/tools`).
    pub async fn upsert_tool(&self, definition: &ToolDefinition) -> Result<AttachedTool> {
        debug!(tool = definition.name(), "upserting tool");
        let resp = self
            .request(Method::PUT, "/v1/tools")
            .json(definition)
            .send()
            .await?;
        let resp = http::check_status(resp).await?;
        Ok(resp.json().await?)
    }

    /// Register an MCP server connection (`PUT /v1/tools/mcp/servers`).
    pub async fn add_mcp_server(&self, config: &McpServerConfig) -> Result<()> {
        debug!(server = %config.server_name, "adding MCP server");
        let resp = self
            .request(Method::PUT, "/v1/tools/mcp/servers")
            .json(config)
            .send()
            .await?;
        http::check_status(resp).await?;
        Ok(())
    }

    /// List the capabilities an MCP server exposes.
    pub async fn list_mcp_tools(&self, server_name: &str) -> Result<Vec<McpToolSchema>> {
        let resp = self
            .request(
                Method::GET,
                &format!("/v1/tools/mcp/servers/{server_name}/tools"),
            )
            .send()
            .await?;
        let resp = http::check_status(resp).await?;
        Ok(resp.json().await?)
    }

    /// Attach one MCP capability to the platform tool catalog, returning its
    /// assigned identifier.
    pub async fn add_mcp_tool(&self, server_name: &str, tool_name: &str) -> Result<AttachedTool> {
        debug!(server = server_name, tool = tool_name, "attaching MCP tool");
        let resp = self
            .request(
                Method::POST,
                &format!("/v1/tools/mcp/servers/{server_name}/{tool_name}"),
            )
            .send()
            .await?;
        let resp = http::check_status(resp).await?;
        Ok(resp.json().await?)
    }
}
