//! Agent creation, response streaming, and report read-back against a mock
//! platform.

mod common;

use deepthought::agent;
use deepthought::types::{MessageCreate, StreamedEvent, ToolCallRecord};
use futures::StreamExt;
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn bootstrap_creates_the_agent_with_memory_and_tools() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/agents"))
        .and(body_string_contains("Deep Thought"))
        .and(body_string_contains("research_plan"))
        .and(body_string_contains("create_research_plan"))
        .and(body_string_contains("anthropic/claude-sonnet-4-20250514"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "agent-42",
            "name": "Deep Thought"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::test_client(&server);
    let handle = agent::bootstrap(&client, vec!["tool-search".into()])
        .await
        .expect("bootstrap should succeed");

    assert_eq!(handle.id, "agent-42");
    assert_eq!(handle.name, "Deep Thought");
}

#[tokio::test]
async fn streamed_events_arrive_in_order_with_unknowns_preserved() {
    let server = MockServer::start().await;

    let body = concat!(
        "data: {\"message_type\": \"reasoning\", \"reasoning\": \"planning the search\"}\n\n",
        ": keep-alive\n",
        "data: {\"message_type\": \"tool_call_message\", \"tool_call\": ",
        "{\"name\": \"web_search_exa\", \"arguments\": \"{\\\"query\\\": \\\"postgres\\\"}\"}}\n\n",
        "data: {\"message_type\": \"usage_statistics\", \"total_tokens\": 9}\n\n",
        "data: {\"message_type\": \"assistant_message\", \"content\": \"Report is ready.\"}\n\n",
        "data: [DONE]\n\n",
    );

    Mock::given(method("POST"))
        .and(path("/v1/agents/agent-42/messages/stream"))
        .and(body_string_contains("\"role\":\"user\""))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::test_client(&server);
    let stream = client
        .stream_message("agent-42", vec![MessageCreate::user("research postgres")])
        .await
        .expect("stream should open");

    let events: Vec<StreamedEvent> = stream
        .map(|event| event.expect("event should decode"))
        .collect()
        .await;

    assert_eq!(
        events,
        vec![
            StreamedEvent::Reasoning("planning the search".into()),
            StreamedEvent::ToolCall(ToolCallRecord {
                name: "web_search_exa".into(),
                arguments: json!({"query": "postgres"}),
            }),
            StreamedEvent::Unknown {
                message_type: "usage_statistics".into()
            },
            StreamedEvent::Assistant("Report is ready.".into()),
        ]
    );
}

#[tokio::test]
async fn report_block_is_retrieved_by_label() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/agents/agent-42/core-memory/blocks/research_report"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "label": "research_report",
            "value": "# Postgres\n\nA report with citations [1]."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::test_client(&server);
    let block = client
        .retrieve_block("agent-42", "research_report")
        .await
        .expect("block retrieval should succeed");

    assert_eq!(block.label, "research_report");
    assert!(block.value.starts_with("# Postgres"));
}

#[tokio::test]
async fn agent_creation_failure_propagates() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/agents"))
        .respond_with(ResponseTemplate::new(422).set_body_string("bad embedding"))
        .mount(&server)
        .await;

    let client = common::test_client(&server);
    let err = agent::bootstrap(&client, Vec::new())
        .await
        .expect_err("creation should fail");

    assert!(err.to_string().contains("422"));
}
