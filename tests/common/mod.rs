//! Shared helpers for the wiremock-based integration tests.

use deepthought::client::LettaClient;
use deepthought::config::DeepthoughtConfig;
use wiremock::MockServer;

/// Config pointed at a mock platform, with a resolvable Exa key.
pub fn test_config(server: &MockServer) -> DeepthoughtConfig {
    DeepthoughtConfig::new(server.uri()).with_exa_api_key("test-exa-key")
}

/// Client pointed at a mock platform.
pub fn test_client(server: &MockServer) -> LettaClient {
    LettaClient::new(&test_config(server)).expect("client should build")
}
