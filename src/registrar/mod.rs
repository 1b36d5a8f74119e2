//! Registers the research tools in the platform's tool catalog.
//!
//! The platform executes tool source itself, so each definition ships the
//! source alongside its JSON schema. The behavior of both tools is pinned by
//! the `memory` module's tests.

use std::collections::BTreeMap;

use serde_json::json;
use tracing::{info, warn};

use crate::client::LettaClient;
use crate::types::{RegistrationOutcome, ToolDefinition};

pub const CREATE_RESEARCH_PLAN: &str = "create_research_plan";
pub const RESET_RESEARCH: &str = "reset_research";

const CREATE_RESEARCH_PLAN_DESCRIPTION: &str = "Initiate a research process by coming up with an \
     initial plan for your research process. For your research, you will be able to query the web \
     repeatedly. You should come up with a list of 3-4 topics you should try to search and explore.";

const RESET_RESEARCH_DESCRIPTION: &str = "Reset your state when you terminate a research process. \
     Use this tool to clean up your memory when you no longer need to persist your existing \
     research state, such as if the conversation topic has changed or you need to research a new \
     topic.";

const CREATE_RESEARCH_PLAN_SOURCE: &str = r#"def create_research_plan(agent_state: "AgentState", research_plan: List[str], topic: str):
    """Initiate a research process by coming up with an initial plan for your research process.

    Args:
        research_plan (List[str]): The sequential research plan to help guide the search process
        topic (str): The research topic
    """
    plan = f"The plan of action is to research `{topic}` with the following steps: \n"
    for i, step in enumerate(research_plan):
        plan += f"- [ ] Step {i + 1} - {step}\n"
    agent_state.memory.update_block_value(label="research_plan", value=plan)
    return "Research plan successfully created, time to execute the plan!"
"#;

const RESET_RESEARCH_SOURCE: &str = r#"def reset_research(agent_state: "AgentState"):
    """Reset your state when you terminate a research process."""
    agent_state.memory.update_block_value(label="research_plan", value="")
    agent_state.memory.update_block_value(label="research_report", value="")
    return "Research state successfully reset"
"#;

/// Definition uploaded for `create_research_plan`.
pub fn create_research_plan_definition() -> ToolDefinition {
    ToolDefinition {
        source_code: CREATE_RESEARCH_PLAN_SOURCE.to_string(),
        source_type: "python".to_string(),
        description: CREATE_RESEARCH_PLAN_DESCRIPTION.to_string(),
        json_schema: json!({
            "name": CREATE_RESEARCH_PLAN,
            "description": CREATE_RESEARCH_PLAN_DESCRIPTION,
            "parameters": {
                "type": "object",
                "properties": {
                    "research_plan": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "The sequential research plan to help guide the search process"
                    },
                    "topic": {
                        "type": "string",
                        "description": "The research topic to investigate"
                    }
                },
                "required": ["research_plan", "topic"]
            }
        }),
    }
}

/// Definition uploaded for `reset_research`.
pub fn reset_research_definition() -> ToolDefinition {
    ToolDefinition {
        source_code: RESET_RESEARCH_SOURCE.to_string(),
        source_type: "python".to_string(),
        description: RESET_RESEARCH_DESCRIPTION.to_string(),
        json_schema: json!({
            "name": RESET_RESEARCH,
            "description": RESET_RESEARCH_DESCRIPTION,
            "parameters": {
                "type": "object",
                "properties": {},
                "required": []
            }
        }),
    }
}

/// Upsert both research tools, recording a per-tool outcome.
///
/// A duplicate reported by the platform counts as success, and a failure on
/// one tool does not abort registration of the other. No retries.
pub async fn register_research_tools(
    client: &LettaClient,
) -> BTreeMap<&'static str, RegistrationOutcome> {
    let definitions = [
        (CREATE_RESEARCH_PLAN, create_research_plan_definition()),
        (RESET_RESEARCH, reset_research_definition()),
    ];

    let mut outcomes = BTreeMap::new();
    for (name, definition) in definitions {
        let outcome = match client.upsert_tool(&definition).await {
            Ok(_) => {
                info!(tool = name, "registered research tool");
                RegistrationOutcome::Registered
            }
            Err(e) if e.is_already_exists() => {
                info!(tool = name, "research tool already registered");
                RegistrationOutcome::AlreadyRegistered
            }
            Err(e) => {
                warn!(tool = name, error = %e, "research tool registration failed");
                RegistrationOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };
        outcomes.insert(name, outcome);
    }
    outcomes
}
