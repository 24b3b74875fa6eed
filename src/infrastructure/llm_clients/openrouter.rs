use super::LLMClient;
use crate::domain::chat::{ChatCompletion, ChatRequest};
use crate::domain::error::{AppError, Result};
use crate::domain::llm_config::LLMConfig;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

pub struct OpenRouterClient {
    client: reqwest::Client,
}

impl OpenRouterClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for OpenRouterClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LLMClient for OpenRouterClient {
    async fn chat(&self, config: &LLMConfig, request: &ChatRequest) -> Result<ChatCompletion> {
        let url = config.chat_completions_url();

        let response = self
            .client
            .post(&url)
            .bearer_auth(&config.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::LLMError(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::LLMError(e.to_string()))?;

        if !status.is_success() {
            warn!(status = %status, body = %text, "OpenRouter returned an error status");
        } else {
            debug!(status = %status, model = %request.model, "OpenRouter call completed");
        }

        let body: Value =
            serde_json::from_str(&text).map_err(|e| AppError::LLMError(e.to_string()))?;

        Ok(ChatCompletion::from_value(body))
    }
}
