//! Wire types for the platform API.

pub mod agent;
pub mod stream;
pub mod tool;

pub use agent::{AgentHandle, Block, CreateAgentRequest, MemoryBlockSpec, MessageCreate};
pub use stream::{StreamedEvent, ToolCallRecord};
pub use tool::{
    AttachedTool, McpServerConfig, McpToolSchema, RegistrationOutcome, ToolDefinition, ToolId,
};
