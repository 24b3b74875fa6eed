pub mod openrouter;

use crate::domain::chat::{ChatCompletion, ChatRequest};
use crate::domain::error::Result;
use crate::domain::llm_config::LLMConfig;
use async_trait::async_trait;

pub use openrouter::OpenRouterClient;

#[async_trait]
pub trait LLMClient {
    /// Sends one chat completion request and returns the decoded response body.
    ///
    /// A body without `choices` is not an error here; callers decide what a
    /// missing message means.
    async fn chat(&self, config: &LLMConfig, request: &ChatRequest) -> Result<ChatCompletion>;
}
