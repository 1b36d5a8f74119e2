//! Exa MCP search integration setup.

use tracing::{info, warn};

use crate::client::LettaClient;
use crate::config::DeepthoughtConfig;
use crate::error::Result;
use crate::types::{McpServerConfig, ToolId};

/// Server name the Exa connection is registered under.
pub const EXA_SERVER_NAME: &str = "exa";

/// Capabilities attached from the Exa server. Everything else the server
/// advertises is ignored without an attach attempt.
pub const EXA_ALLOWED_TOOLS: [&str; 2] = ["web_search_exa", "crawling_exa"];

/// Registration payload for the Exa server, bridged over stdio.
fn exa_server_config(api_key: &str) -> McpServerConfig {
    McpServerConfig::stdio(
        EXA_SERVER_NAME,
        "npx",
        vec![
            "-y".to_string(),
            "mcp-remote".to_string(),
            format!("https://mcp.exa.ai/mcp?exaApiKey={api_key}"),
        ],
    )
}

/// Configure the Exa MCP server and attach the allow-listed search tools,
/// returning the attached tool ids.
///
/// Degrades to an empty list — without touching the network — when no API
/// key is configured, and on any failure before capability attachment. The
/// returned list may be shorter than the allow-list when individual
/// capabilities fail to attach.
pub async fn setup_exa_search(client: &LettaClient, config: &DeepthoughtConfig) -> Vec<ToolId> {
    let Some(api_key) = config.exa_api_key.as_deref() else {
        warn!("no Exa API key configured; the agent will run without search tools");
        warn!("set EXA_API_KEY to enable search (keys: https://dashboard.exa.ai/api-keys)");
        return Vec::new();
    };

    match attach_exa_tools(client, api_key).await {
        Ok(tool_ids) => {
            if !tool_ids.is_empty() {
                info!(count = tool_ids.len(), "attached Exa search tools");
            }
            tool_ids
        }
        Err(e) => {
            warn!(error = %e, "Exa MCP setup failed; continuing without search tools");
            Vec::new()
        }
    }
}

async fn attach_exa_tools(client: &LettaClient, api_key: &str) -> Result<Vec<ToolId>> {
    if let Err(e) = client.add_mcp_server(&exa_server_config(api_key)).await {
        // An existing registration is fine; anything else aborts setup.
        if !e.is_already_exists() {
            return Err(e);
        }
        info!(server = EXA_SERVER_NAME, "MCP server already registered");
    }

    let discovered = client.list_mcp_tools(EXA_SERVER_NAME).await?;

    let mut tool_ids = Vec::new();
    for tool in discovered {
        if !EXA_ALLOWED_TOOLS.contains(&tool.name.as_str()) {
            continue;
        }
        match client.add_mcp_tool(EXA_SERVER_NAME, &tool.name).await {
            Ok(attached) => tool_ids.push(attached.id),
            Err(e) => {
                warn!(tool = %tool.name, error = %e, "failed to attach Exa tool; skipping")
            }
        }
    }
    Ok(tool_ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_config_embeds_the_api_key_in_the_remote_url() {
        let config = exa_server_config("test-key");
        assert_eq!(config.server_name, EXA_SERVER_NAME);
        assert_eq!(config.command, "npx");
        assert_eq!(
            config.args,
            vec!["-y", "mcp-remote", "https://mcp.exa.ai/mcp?exaApiKey=test-key"]
        );
    }

    #[test]
    fn allow_list_names_the_two_search_capabilities() {
        assert!(EXA_ALLOWED_TOOLS.contains(&"web_search_exa"));
        assert!(EXA_ALLOWED_TOOLS.contains(&"crawling_exa"));
        assert!(!EXA_ALLOWED_TOOLS.contains(&"deep_researcher_start"));
    }
}
