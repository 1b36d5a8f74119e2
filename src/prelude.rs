//! Convenience re-exports for driver code.

pub use crate::client::LettaClient;
pub use crate::config::DeepthoughtConfig;
pub use crate::error::{DeepthoughtError, Result};
pub use crate::types::{AgentHandle, RegistrationOutcome, StreamedEvent, ToolId};
