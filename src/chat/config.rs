//! Configuration for the chat boundary.

use crate::utilities::errors::CompanionError;

/// Runtime configuration for the completion service and server.
#[derive(Debug, Clone)]
pub struct CompanionConfig {
    /// API key for the completion provider.
    pub api_key: String,
    /// Provider base URL (OpenAI-compatible).
    pub base_url: String,
    /// Model name for replies.
    pub model: String,
    /// Fixed per-request timeout, seconds.
    pub request_timeout_secs: u64,
}

impl CompanionConfig {
    /// Load from environment variables.
    ///
    /// - `LETTURA_API_KEY` (falls back to `OPENAI_API_KEY`)
    /// - `LETTURA_BASE_URL` (default: `https://api.openai.com/v1`)
    /// - `LETTURA_MODEL` (default: `gpt-4o-mini`)
    /// - `LETTURA_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, CompanionError> {
        let api_key = std::env::var("LETTURA_API_KEY")
            .or_else(|_| std::env::var("OPENAI_API_KEY"))
            .map_err(|_| CompanionError::Config {
                message: "LETTURA_API_KEY (or OPENAI_API_KEY) is not set".into(),
            })?;

        let request_timeout_secs = match std::env::var("LETTURA_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|_| CompanionError::Config {
                message: format!("LETTURA_TIMEOUT_SECS is not a number: {}", raw),
            })?,
            Err(_) => 30,
        };

        Ok(Self {
            api_key,
            base_url: std::env::var("LETTURA_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".into()),
            model: std::env::var("LETTURA_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into()),
            request_timeout_secs,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_literal_defaults() {
        let config = CompanionConfig {
            api_key: "k".into(),
            base_url: "https://api.openai.com/v1".into(),
            model: "gpt-4o-mini".into(),
            request_timeout_secs: 30,
        };
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.request_timeout_secs, 30);
    }
}
