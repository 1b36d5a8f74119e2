//! Shared HTTP plumbing: client construction, headers, SSE line parsing.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::error::{DeepthoughtError, Result};

/// Build the HTTP client.
///
/// Only the connect phase is bounded; agent turns stream for minutes, so
/// there is no overall request timeout.
pub(crate) fn build_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .connect_timeout(std::time::Duration::from_secs(30))
        .build()
        .map_err(DeepthoughtError::Network)
}

/// Default headers for the platform's JSON API, with an optional bearer token.
pub(crate) fn json_headers(token: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some(token) = token {
        if let Ok(val) = HeaderValue::from_str(&format!("Bearer {token}")) {
            headers.insert(AUTHORIZATION, val);
        }
    }
    headers
}

/// Parse an SSE "data:" line, returning None for "[DONE]".
pub(crate) fn parse_sse_data(line: &str) -> Option<&str> {
    let data = line.strip_prefix("data: ")?;
    if data == "[DONE]" {
        return None;
    }
    Some(data)
}

/// Map a non-2xx response into an API error, consuming the body.
pub(crate) async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response> {
    let status = resp.status().as_u16();
    if !(200..300).contains(&status) {
        let body = resp.text().await.unwrap_or_default();
        return Err(DeepthoughtError::api(status, body));
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sse_data_strips_prefix() {
        assert_eq!(parse_sse_data("data: {\"a\":1}"), Some("{\"a\":1}"));
    }

    #[test]
    fn parse_sse_data_skips_done_and_non_data_lines() {
        assert_eq!(parse_sse_data("data: [DONE]"), None);
        assert_eq!(parse_sse_data("event: ping"), None);
        assert_eq!(parse_sse_data(": keep-alive"), None);
    }

    #[test]
    fn json_headers_include_bearer_token_when_present() {
        let headers = json_headers(Some("secret"));
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer secret");

        let headers = json_headers(None);
        assert!(headers.get(AUTHORIZATION).is_none());
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }
}
