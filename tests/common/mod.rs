//! Test utilities and helper functions for the autoblogger test suite

use autoblogger::{CompletionClient, GenerationError, ModelConfig, NormalizerConfig};
use std::collections::VecDeque;
use std::sync::Mutex;

#[allow(dead_code)]
pub const OPEN: &str = "<div class=card>";
#[allow(dead_code)]
pub const CLOSE: &str = "</div>";

/// Completion client that replays scripted answers and records prompts
#[allow(dead_code)]
pub struct ScriptedClient {
    responses: Mutex<VecDeque<Result<String, GenerationError>>>,
    prompts: Mutex<Vec<(String, String)>>,
}

#[allow(dead_code)]
impl ScriptedClient {
    pub fn new(responses: Vec<Result<String, GenerationError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// (model, prompt) pairs in call order
    pub fn calls(&self) -> Vec<(String, String)> {
        self.prompts.lock().unwrap().clone()
    }
}

impl CompletionClient for ScriptedClient {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, GenerationError> {
        self.prompts
            .lock()
            .unwrap()
            .push((model.to_string(), prompt.to_string()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(GenerationError::EmptyResponse))
    }
}

/// Card wrapper with a couple of tag styles and a callout rule
#[allow(dead_code)]
pub fn card_config() -> NormalizerConfig {
    NormalizerConfig::builder()
        .wrapper(OPEN, CLOSE)
        .tag_style("h2", "color:red;")
        .tag_style("p", "margin: 0;")
        .callout(r#"<div class="key-takeaways">"#, "padding: 20px;")
        .build()
        .unwrap()
}

/// Model config pointing at a mock server
#[allow(dead_code)]
pub fn model_config(endpoint: &str, api_key: Option<&str>) -> ModelConfig {
    ModelConfig {
        endpoint: endpoint.to_string(),
        api_key: api_key.map(str::to_string),
        timeout_secs: 5,
        ..ModelConfig::default()
    }
}

/// OpenAI chat completion response body with one choice
#[allow(dead_code)]
pub fn chat_response(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }
        ]
    })
    .to_string()
}
