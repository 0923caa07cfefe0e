// SYNOID Shorts LLM Bridge
// Copyright (c) 2026 Xing_The_Creator | SYNOID
//
// OpenAI-compatible chat completion client used by the director's remote path.

use crate::config::ShortsConfig;
use crate::error::{Result, ShortsError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Anything that can turn a prompt into completion text.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Backend name for logs
    fn name(&self) -> &str;

    /// Returns the raw completion text for a user prompt and system prompt.
    async fn complete(&self, prompt: &str, system: &str) -> Result<String>;
}

const TEMPERATURE: f32 = 0.7;

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

pub struct OpenAiBackend {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiBackend {
    pub fn new(api_key: &str, base_url: &str, model: &str) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(ShortsError::Config("OpenAI API key is empty".to_string()));
        }

        // No request timeout: the call blocks until the server answers.
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }

    pub fn from_config(config: &ShortsConfig) -> Result<Self> {
        let key = config
            .api_key
            .as_deref()
            .ok_or_else(|| ShortsError::Config("OPENAI_API_KEY is not set".to_string()))?;
        Self::new(key, &config.base_url, &config.model)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl CompletionBackend for OpenAiBackend {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, prompt: &str, system: &str) -> Result<String> {
        info!("[BRIDGE] Requesting completion from {} ({})", self.base_url, self.model);

        let payload = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
        };

        let endpoint = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(ShortsError::Api(format!("{}: {}", status, message)));
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body)?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or(ShortsError::EmptyCompletion)?;

        debug!("[BRIDGE] Completion: {}", content);
        Ok(content)
    }
}
