use std::sync::Arc;

use tracing::{error, info};

use crate::application::GenerateInterviewUseCase;
use crate::domain::error::Result;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::db::{InterviewStore, SqliteInterviewStore};
use crate::infrastructure::llm_clients::{LLMClient, OpenRouterClient};
use crate::interfaces::http::HttpState;

pub async fn setup(config: &AppConfig) -> Result<HttpState> {
    let store = SqliteInterviewStore::init(&config.database_url)
        .await
        .map_err(|err| {
            error!(error = %err, database_url = %config.database_url, "Failed to open interview store");
            err
        })?;
    info!(database_url = %config.database_url, "Interview store ready");

    let llm_client: Arc<dyn LLMClient + Send + Sync> = Arc::new(OpenRouterClient::new());
    let store: Arc<dyn InterviewStore + Send + Sync> = Arc::new(store);

    let generate_interview_use_case = Arc::new(GenerateInterviewUseCase::new(
        llm_client,
        store,
        config.llm_config(),
    ));

    Ok(HttpState {
        generate_interview_use_case,
    })
}
