// src/llm/mod.rs

use serde::{Deserialize, Serialize};

use crate::error::ChatError;

/// Seam between the pipeline and whatever model endpoint backs it. The
/// optimizer and reporter both talk through this trait, which is what lets
/// tests script replies without a network.
pub trait ChatModel {
    fn complete(&self, prompt: &str) -> Result<String, ChatError>;
}

/// Blocking client for an OpenAI-style `/v1/chat/completions` endpoint.
pub struct OpenAiChat {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiChat {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com";

    pub fn new(api_key: &str, model: &str) -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL, api_key, model)
    }

    /// Base URL override, used by tests to point at a local mock server.
    pub fn with_base_url(base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: String,
}

impl ChatModel for OpenAiChat {
    fn complete(&self, prompt: &str) -> Result<String, ChatError> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let payload = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .map_err(|err| ChatError::Transport(err.to_string()))?
            .error_for_status()
            .map_err(|err| ChatError::Transport(err.to_string()))?;

        let decoded: ChatResponse = response
            .json()
            .map_err(|err| ChatError::Transport(format!("failed to parse reply: {err}")))?;

        let text = decoded
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(ChatError::EmptyCompletion);
        }
        Ok(text.trim().to_string())
    }
}
