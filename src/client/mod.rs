//! Typed HTTP client for the Letta-compatible platform API.

mod agents;
mod http;
mod tools;

use reqwest::Method;

use crate::config::DeepthoughtConfig;
use crate::error::Result;

/// Client for one platform deployment.
///
/// Owns its `reqwest::Client`; construct once from the config and pass by
/// reference into each component.
pub struct LettaClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl LettaClient {
    pub fn new(config: &DeepthoughtConfig) -> Result<Self> {
        Ok(Self {
            http: http::build_client()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Base URL this client talks to (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, format!("{}{path}", self.base_url))
            .headers(http::json_headers(self.token.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped_from_base_url() {
        let config = DeepthoughtConfig::new("http://platform.test/");
        let client = LettaClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://platform.test");
    }
}
