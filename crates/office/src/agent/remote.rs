//! Remote model client (Anthropic Messages API)

use std::time::Duration;

use crate::state::chat::{ChatMessage, ChatRole};
use crate::state::settings::AgentSettings;

/// Errors from the remote agent call. Callers mask these with a scripted reply.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("no API key configured")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error: {0}")]
    Status(u16),
    #[error("response had no text content")]
    EmptyResponse,
}

/// HTTP client for the hosted model
pub struct RemoteAgent {
    client: reqwest::Client,
    settings: AgentSettings,
    api_key: Option<String>,
}

impl RemoteAgent {
    pub fn new(settings: &AgentSettings, api_key: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to default HTTP client: {e}");
                reqwest::Client::new()
            });
        Self {
            client,
            settings: settings.clone(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn set_api_key(&mut self, key: Option<String>) {
        self.api_key = key.filter(|k| !k.trim().is_empty());
    }

    /// Ask the model for the next assistant turn of `history`
    pub async fn reply(
        &self,
        system_prompt: &str,
        history: &[ChatMessage],
    ) -> Result<String, AgentError> {
        let api_key = self.api_key.as_ref().ok_or(AgentError::MissingApiKey)?;

        let response = self
            .client
            .post(&self.settings.api_url)
            .header("x-api-key", api_key)
            .header("anthropic-version", &self.settings.api_version)
            .header("content-type", "application/json")
            .json(&serde_json::json!({
                "model": self.settings.model,
                "max_tokens": self.settings.max_tokens,
                "system": system_prompt,
                "messages": request_messages(history),
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AgentError::Status(status.as_u16()));
        }

        let body: serde_json::Value = response.json().await?;

        body["content"]
            .as_array()
            .and_then(|arr| arr.first())
            .and_then(|block| block["text"].as_str())
            .filter(|text| !text.trim().is_empty())
            .map(str::to_string)
            .ok_or(AgentError::EmptyResponse)
    }
}

/// Conversation turns in API form. The API requires the first turn to come
/// from the user, so the seeded greeting is not sent.
fn request_messages(history: &[ChatMessage]) -> Vec<serde_json::Value> {
    history
        .iter()
        .skip_while(|m| m.role == ChatRole::Assistant)
        .map(|m| {
            serde_json::json!({
                "role": m.role.as_str(),
                "content": m.text,
            })
        })
        .collect()
}
