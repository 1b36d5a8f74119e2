//! Agent lifecycle and messaging endpoints.

use futures::stream::BoxStream;
use futures::StreamExt;
use reqwest::Method;
use serde_json::json;
use tracing::debug;

use crate::error::{DeepthoughtError, Result};
use crate::types::{AgentHandle, Block, CreateAgentRequest, MessageCreate, StreamedEvent};

use super::{http, LettaClient};

impl LettaClient {
    /// Create an agent (`POST /v1/agents`).
    pub async fn create_agent(&self, request: &CreateAgentRequest) -> Result<AgentHandle> {
        debug!(name = %request.name, "creating agent");
        let resp = self
            .request(Method::POST, "/v1/agents")
            .json(request)
            .send()
            .await?;
        let resp = http::check_status(resp).await?;
        Ok(resp.json().await?)
    }

    /// Submit messages to an agent and stream the response events in
    /// arrival order (`POST /v1/agents/{id}/messages/stream`).
    ///
    /// The stream is single-consumer and unbuffered: each event is decoded
    /// as its SSE frame completes, and a transport error ends the stream
    /// after being yielded.
    pub async fn stream_message(
        &self,
        agent_id: &str,
        messages: Vec<MessageCreate>,
    ) -> Result<BoxStream<'static, Result<StreamedEvent>>> {
        debug!(agent_id, "submitting task");
        let resp = self
            .request(
                Method::POST,
                &format!("/v1/agents/{agent_id}/messages/stream"),
            )
            .json(&json!({ "messages": messages }))
            .send()
            .await?;
        let resp = http::check_status(resp).await?;
        let byte_stream = resp.bytes_stream();

        let stream = async_stream::stream! {
            let mut buffer = String::new();
            futures::pin_mut!(byte_stream);

            while let Some(chunk_result) = byte_stream.next().await {
                let chunk = match chunk_result {
                    Ok(c) => c,
                    Err(e) => {
                        yield Err(DeepthoughtError::Network(e));
                        break;
                    }
                };

                buffer.push_str(&String::from_utf8_lossy(&chunk));

                while let Some(line_end) = buffer.find('\n') {
                    let line = buffer[..line_end].trim().to_string();
                    buffer = buffer[line_end + 1..].to_string();

                    if line.is_empty() || line.starts_with(':') {
                        continue;
                    }

                    if let Some(data) = http::parse_sse_data(&line) {
                        yield StreamedEvent::from_json(data);
                    }
                }
            }
        };

        Ok(stream.boxed())
    }

    /// Read back one memory block
    /// (`GET /v1/agents/{id}/core-memory/blocks/{label}`).
    pub async fn retrieve_block(&self, agent_id: &str, label: &str) -> Result<Block> {
        let resp = self
            .request(
                Method::GET,
                &format!("/v1/agents/{agent_id}/core-memory/blocks/{label}"),
            )
            .send()
            .await?;
        let resp = http::check_status(resp).await?;
        Ok(resp.json().await?)
    }
}
