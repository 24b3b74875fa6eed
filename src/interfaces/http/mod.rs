use crate::application::GenerateInterviewUseCase;
use crate::domain::error::AppError;
use crate::domain::interview::{GenerateInterviewRequest, GenerateInterviewResponse};
use actix_cors::Cors;
use actix_web::{dev::Server, error::InternalError, post, web, App, HttpResponse, HttpServer, Responder};
use std::sync::Arc;
use tracing::{error, warn};

pub struct HttpState {
    pub generate_interview_use_case: Arc<GenerateInterviewUseCase>,
}

#[post("/generate-interview")]
async fn generate_interview(
    data: web::Data<HttpState>,
    req: web::Json<GenerateInterviewRequest>,
) -> impl Responder {
    match data
        .generate_interview_use_case
        .execute(req.into_inner())
        .await
    {
        Ok(_) => HttpResponse::Ok().json(GenerateInterviewResponse::ok()),
        Err(e) => {
            if e.is_client_error() {
                warn!(error = %e, "Interview request rejected");
            } else {
                error!(error = %e, "Interview generation failed");
            }
            error_response(&e)
        }
    }
}

/// Maps a failure onto the `{ success: false, error, aiOutput? }` body.
pub fn error_response(err: &AppError) -> HttpResponse {
    let body = GenerateInterviewResponse::failure(
        err.to_string(),
        err.ai_output().map(str::to_string),
    );
    if err.is_client_error() {
        HttpResponse::BadRequest().json(body)
    } else {
        HttpResponse::InternalServerError().json(body)
    }
}

/// Body decoding failures answer in the same JSON shape as handler failures.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| {
            let app_error = AppError::Internal(err.to_string());
            error!(error = %app_error, "Failed to decode request body");
            InternalError::from_response(err, error_response(&app_error)).into()
        })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .service(generate_interview),
    );
}

pub fn start_server(state: HttpState, host: &str, port: u16) -> std::io::Result<Server> {
    let state = web::Data::new(state);

    let server = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((host, port))?
    .run();

    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::{ChatCompletion, ChatRequest};
    use crate::domain::error::Result;
    use crate::domain::interview::InterviewRecord;
    use crate::domain::llm_config::LLMConfig;
    use crate::infrastructure::db::InterviewStore;
    use crate::infrastructure::llm_clients::LLMClient;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Answers the draft call with `draft` and the self-check call with `final_answer`.
    struct FixedClient {
        draft: Value,
        final_answer: Value,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl LLMClient for FixedClient {
        async fn chat(&self, _config: &LLMConfig, request: &ChatRequest) -> Result<ChatCompletion> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let body = if request.messages.len() == 1 {
                self.draft.clone()
            } else {
                self.final_answer.clone()
            };
            Ok(serde_json::from_value(body).unwrap())
        }
    }

    #[derive(Default)]
    struct CountingStore {
        writes: AtomicUsize,
    }

    #[async_trait]
    impl InterviewStore for CountingStore {
        async fn create(&self, _record: &InterviewRecord) -> Result<String> {
            let n = self.writes.fetch_add(1, Ordering::SeqCst);
            Ok(format!("doc-{}", n))
        }
    }

    fn message(content: &str) -> Value {
        json!({ "choices": [{ "message": { "role": "assistant", "content": content } }] })
    }

    fn state(client: Arc<FixedClient>, store: Arc<CountingStore>) -> web::Data<HttpState> {
        let use_case = GenerateInterviewUseCase::new(client, store, LLMConfig::new("test-key"));
        web::Data::new(HttpState {
            generate_interview_use_case: Arc::new(use_case),
        })
    }

    fn client(draft: Value, final_answer: Value) -> Arc<FixedClient> {
        Arc::new(FixedClient {
            draft,
            final_answer,
            calls: AtomicUsize::new(0),
        })
    }

    const VALID_BODY: &str =
        r#"{"type":"Mixed","role":"Data Engineer","level":"Senior","techstack":"Python,Spark","amount":2,"userid":"abc"}"#;

    #[actix_web::test]
    async fn test_generate_success() {
        let llm = client(message(r#"["Draft"]"#), message(r#"["Q one", "Q two"]"#));
        let store = Arc::new(CountingStore::default());
        let app = test::init_service(
            App::new()
                .app_data(state(llm.clone(), store.clone()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/generate-interview")
            .insert_header(("content-type", "application/json"))
            .set_payload(VALID_BODY)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "success": true }));
        assert_eq!(llm.calls.load(Ordering::SeqCst), 2);
        assert_eq!(store.writes.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn test_missing_fields_returns_400() {
        let llm = client(message("[]"), message("[]"));
        let store = Arc::new(CountingStore::default());
        let app = test::init_service(
            App::new()
                .app_data(state(llm.clone(), store.clone()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/generate-interview")
            .set_json(json!({ "role": "Dev", "amount": 3, "userid": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({ "success": false, "error": "Missing required fields" })
        );
        assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.writes.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_parse_error_echoes_output() {
        let llm = client(message(r#"["Draft"]"#), message("not json at all"));
        let store = Arc::new(CountingStore::default());
        let app = test::init_service(
            App::new()
                .app_data(state(llm, store.clone()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/generate-interview")
            .insert_header(("content-type", "application/json"))
            .set_payload(VALID_BODY)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], json!(false));
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("AI output parse error: "));
        assert_eq!(body["aiOutput"], json!("not json at all"));
        assert_eq!(store.writes.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_first_call_without_message_returns_500() {
        let llm = client(json!({ "choices": [] }), message("[]"));
        let store = Arc::new(CountingStore::default());
        let app = test::init_service(
            App::new()
                .app_data(state(llm.clone(), store))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/generate-interview")
            .insert_header(("content-type", "application/json"))
            .set_payload(VALID_BODY)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({ "success": false, "error": "Invalid response from OpenRouter (first call)" })
        );
        assert_eq!(llm.calls.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn test_malformed_body_returns_500_without_content_type() {
        let llm = client(message("[]"), message("[]"));
        let store = Arc::new(CountingStore::default());
        let app = test::init_service(
            App::new()
                .app_data(state(llm.clone(), store))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/generate-interview")
            .set_payload("{ role: oops")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], json!(false));
        assert!(body["error"].as_str().unwrap().starts_with("Internal error: "));
        assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
    }
}
