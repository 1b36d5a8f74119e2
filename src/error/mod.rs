//! Error types for Deepthought.

use thiserror::Error;

/// Primary error type for all Deepthought operations.
#[derive(Error, Debug)]
pub enum DeepthoughtError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Stream error: {0}")]
    Stream(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl DeepthoughtError {
    /// Create an API error from a status code and response body.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Whether the platform is reporting a resource that already exists
    /// (duplicate tool, duplicate MCP server). Callers treat these as
    /// "already configured" rather than failures.
    pub fn is_already_exists(&self) -> bool {
        match self {
            Self::Api { status, message } => *status == 409 || message.contains("already exists"),
            _ => false,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, DeepthoughtError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_status_is_already_exists() {
        assert!(DeepthoughtError::api(409, "duplicate").is_already_exists());
    }

    #[test]
    fn already_exists_message_is_detected_on_any_status() {
        let err = DeepthoughtError::api(400, r#"{"detail": "MCP server exa already exists"}"#);
        assert!(err.is_already_exists());
    }

    #[test]
    fn other_api_errors_are_not_already_exists() {
        assert!(!DeepthoughtError::api(500, "internal error").is_already_exists());
        assert!(!DeepthoughtError::Stream("closed".into()).is_already_exists());
    }
}
