//! Runtime configuration, resolved once at startup and passed explicitly.

/// Base URL used when `LETTA_BASE_URL` is unset (a local platform server).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8283";

/// Configuration for one driver run.
///
/// Constructed once — normally from the environment — and passed by
/// reference into each component. There is no global config state.
#[derive(Debug, Clone)]
pub struct DeepthoughtConfig {
    /// Base URL of the Letta-compatible platform.
    pub base_url: String,
    /// Platform access token, if the deployment requires one.
    pub token: Option<String>,
    /// Exa API key for the search integration. `None` degrades the run to
    /// no search capability.
    pub exa_api_key: Option<String>,
}

impl DeepthoughtConfig {
    /// Config pointing at a platform URL, with no credentials.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            exa_api_key: None,
        }
    }

    /// Load from `LETTA_BASE_URL`, `LETTA_API_KEY`, and `EXA_API_KEY`,
    /// honoring a `.env` file if present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self {
            base_url: non_empty(std::env::var("LETTA_BASE_URL").ok())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            token: non_empty(std::env::var("LETTA_API_KEY").ok()),
            exa_api_key: non_empty(std::env::var("EXA_API_KEY").ok()),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_exa_api_key(mut self, key: impl Into<String>) -> Self {
        self.exa_api_key = Some(key.into());
        self
    }
}

/// Treat unset and empty environment values the same way.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_config_has_no_credentials() {
        let config = DeepthoughtConfig::new("http://platform.test");
        assert_eq!(config.base_url, "http://platform.test");
        assert!(config.token.is_none());
        assert!(config.exa_api_key.is_none());
    }

    #[test]
    fn builders_set_credentials() {
        let config = DeepthoughtConfig::new(DEFAULT_BASE_URL)
            .with_token("letta-token")
            .with_exa_api_key("exa-key");
        assert_eq!(config.token.as_deref(), Some("letta-token"));
        assert_eq!(config.exa_api_key.as_deref(), Some("exa-key"));
    }

    #[test]
    fn empty_env_values_count_as_missing() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("   ".into())), None);
        assert_eq!(non_empty(Some("value".into())), Some("value".into()));
        assert_eq!(non_empty(None), None);
    }
}
