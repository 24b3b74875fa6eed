mod llm_output;
mod prompts;

use crate::domain::chat::{AssistantMessage, ChatMessage, ChatRequest, ReasoningOptions};
use crate::domain::error::{AppError, Result};
use crate::domain::interview::{
    normalize_techstack, optional_text, render_value, GenerateInterviewRequest, InterviewRecord,
};
use crate::domain::llm_config::LLMConfig;
use crate::infrastructure::cover_image::random_interview_cover;
use crate::infrastructure::db::InterviewStore;
use crate::infrastructure::llm_clients::LLMClient;
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

use llm_output::extract_questions;
use prompts::{build_questions_prompt, SELF_CHECK_PROMPT};

pub const MISSING_FIELDS: &str = "Missing required fields";
const RAW_OUTPUT_PREVIEW_CHARS: usize = 300;

#[derive(Debug, Clone, Copy)]
enum CompletionCall {
    First,
    Second,
}

impl CompletionCall {
    fn invalid_response(self) -> AppError {
        let label = match self {
            CompletionCall::First => "first call",
            CompletionCall::Second => "second call",
        };
        AppError::InvalidLLMResponse(format!("Invalid response from OpenRouter ({})", label))
    }
}

pub struct GenerateInterviewUseCase {
    llm_client: Arc<dyn LLMClient + Send + Sync>,
    store: Arc<dyn InterviewStore + Send + Sync>,
    config: LLMConfig,
}

impl GenerateInterviewUseCase {
    pub fn new(
        llm_client: Arc<dyn LLMClient + Send + Sync>,
        store: Arc<dyn InterviewStore + Send + Sync>,
        config: LLMConfig,
    ) -> Self {
        Self {
            llm_client,
            store,
            config,
        }
    }

    /// Generates, self-checks and stores a question set. Returns the stored document id.
    pub async fn execute(&self, request: GenerateInterviewRequest) -> Result<String> {
        if let Err(errors) = request.validate() {
            info!(fields = ?errors.field_errors().keys().collect::<Vec<_>>(), "Rejected interview request");
            return Err(AppError::ValidationError(MISSING_FIELDS.to_string()));
        }

        let role = render_value(request.role.as_ref());
        let amount = render_value(request.amount.as_ref());
        info!(role = %role, amount = %amount, model = %self.config.model, "Generating interview questions");

        let prompt = build_questions_prompt(&request);

        let first = self
            .complete(
                CompletionCall::First,
                vec![ChatMessage::user(prompt.clone())],
                Some(ReasoningOptions { enabled: true }),
            )
            .await?;

        let draft = first.content.unwrap_or_default();
        let second = self
            .complete(
                CompletionCall::Second,
                vec![
                    ChatMessage::user(prompt),
                    ChatMessage::assistant(draft, first.reasoning_details),
                    ChatMessage::user(SELF_CHECK_PROMPT),
                ],
                None,
            )
            .await?;

        let raw_output = second.content.unwrap_or_else(|| "[]".to_string());
        let questions = extract_questions(&raw_output).map_err(|err| {
            warn!(
                error = %err,
                output = %preview(&raw_output),
                "Failed to extract questions from model output"
            );
            AppError::ParseError {
                message: err.to_string(),
                raw_output: raw_output.clone(),
            }
        })?;

        // The count is only requested in the prompt, never enforced.
        if amount != questions.len().to_string() {
            warn!(requested = %amount, returned = questions.len(), "Model returned a different number of questions");
        }

        let record = InterviewRecord {
            role,
            interview_type: optional_text(request.interview_type.as_ref()),
            level: optional_text(request.level.as_ref()),
            techstack: normalize_techstack(request.techstack.as_ref()),
            questions,
            user_id: render_value(request.user_id.as_ref()),
            finalized: true,
            cover_image: random_interview_cover(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        let id = self.store.create(&record).await?;
        info!(id = %id, questions = record.questions.len(), "Interview saved");

        Ok(id)
    }

    async fn complete(
        &self,
        call: CompletionCall,
        messages: Vec<ChatMessage>,
        reasoning: Option<ReasoningOptions>,
    ) -> Result<AssistantMessage> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages,
            reasoning,
            temperature: self.config.temperature,
        };

        self.llm_client
            .chat(&self.config, &request)
            .await?
            .into_first_message()
            .ok_or_else(|| {
                warn!(call = ?call, "Completion response has no message");
                call.invalid_response()
            })
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() <= RAW_OUTPUT_PREVIEW_CHARS {
        return text.to_string();
    }
    let head: String = text.chars().take(RAW_OUTPUT_PREVIEW_CHARS).collect();
    format!("{}...", head)
}
