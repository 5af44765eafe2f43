//! Language-model advisor: the generative threat source.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use vigil_core::{BaseThreat, LlmConfig, Result, SystemDetails, VigilError};

use crate::prompt;
use crate::source::ThreatSource;

/// A message in a chat conversation with the LLM.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    /// Role of the message sender.
    pub role: Role,
    /// Text content of the message.
    pub content: String,
}

/// Role in the chat conversation.
///
/// # Examples
///
/// ```
/// use vigil_suggest::advisor::Role;
///
/// let role = Role::System;
/// assert_eq!(serde_json::to_string(&role).unwrap(), "\"system\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System-level instructions.
    System,
    /// User input.
    User,
    /// Assistant response.
    Assistant,
}

/// Generative threat advisor over an OpenAI-compatible chat completions API.
///
/// Works with any provider that exposes the `/v1/chat/completions` endpoint:
/// OpenAI, Ollama, vLLM, LiteLLM, etc. The advisor prompts the model against
/// the strict threat-list schema and rejects any response that does not
/// validate.
///
/// # Examples
///
/// ```
/// use vigil_core::LlmConfig;
/// use vigil_suggest::advisor::LlmAdvisor;
///
/// let config = LlmConfig {
///     api_key: Some("test-key".into()),
///     ..LlmConfig::default()
/// };
/// let advisor = LlmAdvisor::new(&config).unwrap();
/// assert_eq!(advisor.model(), "gpt-4o");
/// ```
pub struct LlmAdvisor {
    client: reqwest::Client,
    config: LlmConfig,
}

impl LlmAdvisor {
    /// Create a new advisor from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`VigilError::Generation`] if the HTTP client cannot be built.
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| VigilError::Generation(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Return the model name from the configuration.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Send a chat completion request and return the text response.
    ///
    /// Builds a request to `{base_url}/v1/chat/completions` with the given
    /// messages, temperature 0.1, and JSON response format.
    ///
    /// # Errors
    ///
    /// Returns [`VigilError::Generation`] on HTTP errors or response
    /// structure failures.
    pub async fn chat(&self, messages: Vec<ChatMessage>) -> Result<String> {
        let base_url = self
            .config
            .base_url
            .as_deref()
            .unwrap_or("https://api.openai.com");
        let url = format!("{base_url}/v1/chat/completions");

        let body = serde_json::json!({
            "model": self.config.model,
            "messages": messages,
            "temperature": 0.1,
            "response_format": { "type": "json_object" },
        });

        let mut request = self.client.post(&url);
        if let Some(api_key) = &self.config.api_key {
            request = request.header("Authorization", format!("Bearer {api_key}"));
        }
        request = request.header("Content-Type", "application/json");

        let response = request
            .json(&body)
            .send()
            .await
            .map_err(|e| VigilError::Generation(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(VigilError::Generation(format!(
                "LLM API error {status}: {body_text}"
            )));
        }

        let response_body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| VigilError::Generation(format!("failed to parse response: {e}")))?;

        let content = response_body
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .ok_or_else(|| {
                VigilError::Generation(format!("unexpected response structure: {response_body}"))
            })?;

        Ok(content.to_string())
    }
}

#[async_trait]
impl ThreatSource for LlmAdvisor {
    fn name(&self) -> &str {
        "advisor"
    }

    async fn threats(&self, details: &SystemDetails) -> Result<Vec<BaseThreat>> {
        let messages = vec![
            ChatMessage {
                role: Role::System,
                content: prompt::build_system_prompt(),
            },
            ChatMessage {
                role: Role::User,
                content: prompt::build_suggest_prompt(details),
            },
        ];

        let response = self.chat(messages).await?;
        prompt::parse_suggestion_response(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advisor_construction_succeeds() {
        let config = LlmConfig::default();
        let advisor = LlmAdvisor::new(&config);
        assert!(advisor.is_ok());
    }

    #[test]
    fn model_returns_config_model() {
        let config = LlmConfig {
            model: "gpt-4o-mini".into(),
            ..LlmConfig::default()
        };
        let advisor = LlmAdvisor::new(&config).unwrap();
        assert_eq!(advisor.model(), "gpt-4o-mini");
    }

    #[test]
    fn chat_message_serializes() {
        let msg = ChatMessage {
            role: Role::System,
            content: "hello".into(),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "system");
        assert_eq!(json["content"], "hello");
    }

    #[test]
    fn advisor_source_name() {
        let advisor = LlmAdvisor::new(&LlmConfig::default()).unwrap();
        assert_eq!(ThreatSource::name(&advisor), "advisor");
    }
}
