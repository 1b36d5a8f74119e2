//! Deepthought — a deep-research agent driven on a Letta-compatible platform.
//!
//! The platform owns all durable state: conversation history, memory blocks,
//! and tool execution. This crate is the driver that sets the agent up and
//! watches it work — it registers two research tools in the platform's tool
//! catalog, wires up the Exa MCP search integration, creates an agent with a
//! four-block memory layout, submits one research task, and streams the
//! response to the terminal before rendering the final report.
//!
//! # Quick Start
//!
//! ```no_run
//! use deepthought::prelude::*;
//!
//! # async fn example() -> deepthought::error::Result<()> {
//! let config = DeepthoughtConfig::from_env();
//! let client = LettaClient::new(&config)?;
//!
//! deepthought::registrar::register_research_tools(&client).await;
//! let tool_ids = deepthought::search::setup_exa_search(&client, &config).await;
//!
//! let agent = deepthought::agent::bootstrap(&client, tool_ids).await?;
//! deepthought::agent::run_research(&client, &agent, deepthought::agent::DEFAULT_TASK).await?;
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod client;
pub mod config;
pub mod error;
pub mod memory;
pub mod prelude;
pub mod registrar;
pub mod render;
pub mod search;
pub mod types;
