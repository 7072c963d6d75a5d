//! Completion client — OpenAI-style `/chat/completions` over HTTP.
//!
//! The provider is opaque to the core: this client sends the two prompt
//! blocks plus the turn's message history and returns the reply text. A
//! fixed request timeout comes from configuration; retries, streaming and
//! provider-specific behavior are out of scope.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::chat::config::CompanionConfig;
use crate::utilities::errors::CompanionError;

/// One message of the turn's history, OpenAI wire shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// "user" or "assistant" (the handler injects the system blocks).
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".into(),
            content: content.into(),
        }
    }
}

/// HTTP client for the external text-completion service.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl CompletionClient {
    /// Build a client with the configured fixed timeout.
    pub fn new(config: &CompanionConfig) -> Result<Self, CompanionError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| CompanionError::Config {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    /// Send one turn to the completion service and return the reply text.
    ///
    /// Message layout: persona block and per-turn block as system messages,
    /// then the history verbatim.
    pub async fn complete(
        &self,
        persona_prompt: &str,
        turn_prompt: &str,
        history: &[ChatMessage],
    ) -> Result<String, CompanionError> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(serde_json::json!({ "role": "system", "content": persona_prompt }));
        messages.push(serde_json::json!({ "role": "system", "content": turn_prompt }));
        for m in history {
            messages.push(serde_json::json!({ "role": m.role, "content": m.content }));
        }

        let body = serde_json::json!({
            "model": self.model,
            "messages": messages,
        });

        let resp = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| CompanionError::Completion {
                message: format!("HTTP error: {}", e),
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(CompanionError::CompletionStatus { status, body });
        }

        let json: Value = resp.json().await.map_err(|e| CompanionError::Completion {
            message: format!("JSON parse error: {}", e),
        })?;

        json["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| CompanionError::Completion {
                message: "no content in completion response".into(),
            })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::config::CompanionConfig;

    fn test_config() -> CompanionConfig {
        CompanionConfig {
            api_key: "test".into(),
            base_url: "http://127.0.0.1:1".into(),
            model: "gpt-4o-mini".into(),
            request_timeout_secs: 1,
        }
    }

    #[test]
    fn test_client_builds_from_config() {
        assert!(CompletionClient::new(&test_config()).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_service_surfaces_completion_error() {
        let client = CompletionClient::new(&test_config()).unwrap();
        let err = client
            .complete("persona", "turno", &[ChatMessage::user("ciao")])
            .await
            .unwrap_err();
        assert!(matches!(err, CompanionError::Completion { .. }));
    }
}
