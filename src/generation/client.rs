//! Completion client for OpenAI-compatible chat endpoints

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;

use super::errors::GenerationError;
use crate::config::ModelConfig;

/// A backend that turns a single prompt into text
pub trait CompletionClient: Send + Sync {
    fn complete(
        &self,
        model: &str,
        prompt: &str,
    ) -> impl Future<Output = Result<String, GenerationError>> + Send;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// HTTP client for `POST {endpoint}/v1/chat/completions`
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    config: ModelConfig,
    client: Client,
}

impl OpenAiClient {
    /// # Errors
    ///
    /// Returns [`GenerationError::Http`] if the HTTP client cannot be built.
    pub fn new(config: ModelConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GenerationError::Http(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    #[must_use]
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }
}

impl CompletionClient for OpenAiClient {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, GenerationError> {
        let Some(api_key) = self.config.api_key.as_deref().filter(|k| !k.is_empty()) else {
            return Err(GenerationError::MissingApiKey);
        };

        let url = self.config.chat_completions_url();
        let body = ChatRequest {
            model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        tracing::debug!("Requesting completion from {} with model {}", url, model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout(self.config.timeout_secs)
                } else {
                    GenerationError::Http(format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body: crate::utils::safe_truncate_chars(body.trim(), 300).to_string(),
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidJson(format!("Failed to parse response: {e}")))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(GenerationError::EmptyResponse)?;

        tracing::debug!("Completion returned {} characters", content.chars().count());
        Ok(content)
    }
}
