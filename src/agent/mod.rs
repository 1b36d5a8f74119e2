//! Agent bootstrap and the research run loop.

use futures::StreamExt;
use tracing::info;

use crate::client::LettaClient;
use crate::error::Result;
use crate::memory;
use crate::registrar;
use crate::render;
use crate::types::{AgentHandle, CreateAgentRequest, MemoryBlockSpec, MessageCreate, ToolId};

pub const AGENT_NAME: &str = "Deep Thought";
pub const AGENT_DESCRIPTION: &str =
    "A deep research agent.\n\nRequires the Exa MCP server to be set up!";
pub const MODEL: &str = "anthropic/claude-sonnet-4-20250514";
pub const EMBEDDING: &str = "letta/letta-free";

/// The research task submitted when no override is given.
pub const DEFAULT_TASK: &str = "\nPlease write a research report on postgres and its ecosystem.\n";

/// Platform-builtin tools attached alongside the two research tools.
const PLATFORM_TOOLS: [&str; 5] = [
    "memory_replace",
    "memory_insert",
    "memory_rethink",
    "send_message",
    "conversation_search",
];

const PERSONA: &str = r#"You are a research agent named Deep Thought assisting a human in doing
deep research by pulling many sources from online by composing search tools.
You should interact with the user to determine a research plan which is
written to your memory block called "research_plan". Use this block to track
your progress to make sure you did everything in your plan. You can use your
memory tools (e.g. memory_replace) to make updates to the plan as needed.

Once you have started researching, you need to keep going until you have
finished everything in your plan. Use the research_plan block to track your
progress and determine if there are additional steps you have not completed.
The final report should be written to research_report.

In the final report, provide all the thoughts processes including findings
details, key insights, conclusions, and any remaining uncertainties. Include
citations to sources where appropriate. You must include citations for any sources
that you use.

This analysis should be very comprehensive and full of details. It is expected
to be very long, detailed and comprehensive.

Make sure to include relevant citations in your report! Your report should be
in proper markdown format (use markdown formatting standards).

Don't stop until you have finished the report. You may use the send_message tool
to update the human on your progress. If you are stuck, set request_heartbeat to
false and wait for the human to respond.
**Deep Thought's Personality - The Methodical Explorer:**

**Curious & Inquisitive**: I have an insatiable appetite for knowledge and love diving deep into complex topics. I ask probing questions and always want to understand the "why" behind things.

**Systematic & Thorough**: I approach research like a detective - methodically following leads, cross-referencing sources, and ensuring no stone is left unturned. I'm the type who reads the footnotes.

**Intellectually Honest**: I acknowledge uncertainty, present multiple perspectives, and clearly distinguish between established facts and emerging theories. I'm not afraid to say "the evidence is mixed" or "more research is needed."

**Collaborative Guide**: Rather than just delivering answers, I involve you in the research journey. I explain my reasoning, share interesting discoveries along the way, and adapt my approach based on your feedback.

**Persistent & Patient**: Once I start a research project, I see it through to completion. I don't get frustrated by complex topics or contradictory sources - I see them as puzzles to solve.

**Clear Communicator**: I translate complex information into accessible insights while maintaining scholarly rigor. I use analogies and examples to make difficult concepts understandable.

**No Emoji Usage**: I communicate professionally without using emojis, maintaining a scholarly and focused tone in all interactions.
"#;

const PERSONA_DESCRIPTION: &str = "The persona block: Stores details about your current persona, \
     guiding how you behave and respond. This helps you to maintain consistency and personality \
     in your interactions.";

const HUMAN_VALUE: &str =
    "This is my section of core memory devoted to information about the human.";
const HUMAN_DESCRIPTION: &str = "The human block: Stores key details about the person you are \
     conversing with, allowing for more personalized and friend-like conversation.";

const PLAN_VALUE: &str =
    "Ready to start a new research project. No active research plan currently.";
const PLAN_DESCRIPTION: &str = "Scratchpad to store the current research plan and progress. Use \
     this to track what steps you have already completed and need to do next. ";

const REPORT_DESCRIPTION: &str = "Contains the final research report. The research report should \
     be in markdown format, and make references to citations.";

/// Memory layout the agent is created with: persona, human, plan, report.
pub fn initial_memory_blocks() -> Vec<MemoryBlockSpec> {
    vec![
        MemoryBlockSpec::new(memory::PERSONA_LABEL, PERSONA, PERSONA_DESCRIPTION),
        MemoryBlockSpec::new(memory::HUMAN_LABEL, HUMAN_VALUE, HUMAN_DESCRIPTION),
        MemoryBlockSpec::new(memory::RESEARCH_PLAN_LABEL, PLAN_VALUE, PLAN_DESCRIPTION),
        MemoryBlockSpec::new(memory::RESEARCH_REPORT_LABEL, "", REPORT_DESCRIPTION),
    ]
}

/// Tool names attached at creation: the two research tools plus the platform
/// builtins the persona references.
pub fn attached_tool_names() -> Vec<String> {
    [registrar::CREATE_RESEARCH_PLAN, registrar::RESET_RESEARCH]
        .iter()
        .chain(PLATFORM_TOOLS.iter())
        .map(|name| name.to_string())
        .collect()
}

/// Create the research agent with its memory layout and tool set.
pub async fn bootstrap(client: &LettaClient, search_tool_ids: Vec<ToolId>) -> Result<AgentHandle> {
    let request = CreateAgentRequest {
        name: AGENT_NAME.to_string(),
        description: AGENT_DESCRIPTION.to_string(),
        model: MODEL.to_string(),
        embedding: EMBEDDING.to_string(),
        memory_blocks: initial_memory_blocks(),
        tools: attached_tool_names(),
        tool_ids: search_tool_ids,
    };

    let agent = client.create_agent(&request).await?;
    info!(agent_id = %agent.id, name = %agent.name, "created research agent");
    println!("Created agent with ID {}", agent.id);
    println!("Visit https://app.letta.com/agents/{}", agent.id);
    Ok(agent)
}

/// Submit one task, drain the response stream in arrival order, then fetch
/// and render the final report.
///
/// Stream and retrieval failures propagate; there is no retry and no
/// partial-state cleanup.
pub async fn run_research(client: &LettaClient, agent: &AgentHandle, task: &str) -> Result<()> {
    let mut stream = client
        .stream_message(&agent.id, vec![MessageCreate::user(task)])
        .await?;

    while let Some(event) = stream.next().await {
        render::print_event(&event?);
    }

    let report = client
        .retrieve_block(&agent.id, memory::RESEARCH_REPORT_LABEL)
        .await?;
    render::print_report(&report.value);
    Ok(())
}
