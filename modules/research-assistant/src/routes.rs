//! Axum route handlers for the research assistant API.

use crate::gemini_client::{self, GeminiClient};
use crate::prompt;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use research_types::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

pub struct AppState {
    pub gemini: GeminiClient,
    pub start_time: Instant,
    pub processed_count: AtomicU64,
}

impl AppState {
    pub fn new(gemini: GeminiClient) -> Self {
        Self {
            gemini,
            start_time: Instant::now(),
            processed_count: AtomicU64::new(0),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = tower_http::cors::CorsLayer::permissive();

    Router::new()
        .route(PROCESS_PATH, axum::routing::post(process))
        .route("/api/research/status", axum::routing::get(status))
        .with_state(state)
        .layer(cors)
}

// POST /api/research/process
//
// Upstream failures still answer 200: the panel renders whatever text comes back.
pub async fn process(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ResearchRequest>,
) -> (StatusCode, String) {
    let Some(tag) = req.operation.as_deref() else {
        return (
            StatusCode::BAD_REQUEST,
            "Invalid request: ResearchRequest or operation cannot be null.".to_string(),
        );
    };

    let operation: Operation = match tag.parse() {
        Ok(op) => op,
        Err(e) => {
            log::warn!("[RESEARCH] Rejected request: {}", e);
            return (StatusCode::BAD_REQUEST, e.to_string());
        }
    };

    let full_prompt = prompt::build_prompt(operation, &req.content);
    log::info!(
        "[RESEARCH] {} request ({} chars of content)",
        operation,
        req.content.len()
    );

    let body = match state.gemini.generate(&full_prompt).await {
        Ok(b) => b,
        Err(e) => {
            log::error!("[RESEARCH] {} failed: {}", operation, e);
            return (StatusCode::OK, format!("Error: {}", e));
        }
    };

    let text = match gemini_client::extract_text(&body) {
        Ok(Some(text)) => prompt::format_response(&text),
        Ok(None) => prompt::NO_VALID_RESPONSE.to_string(),
        Err(e) => format!("Error Processing Response: {}", e),
    };

    state.processed_count.fetch_add(1, Ordering::Relaxed);

    (StatusCode::OK, text)
}

// GET /api/research/status
pub async fn status(State(state): State<Arc<AppState>>) -> (StatusCode, Json<ServiceStatus>) {
    let status = ServiceStatus {
        running: true,
        uptime_secs: state.start_time.elapsed().as_secs(),
        total_processed: state.processed_count.load(Ordering::Relaxed),
        model_host: state.gemini.host(),
    };

    (StatusCode::OK, Json(status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;
    use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

    fn state_for(server: &MockServer) -> Arc<AppState> {
        Arc::new(AppState::new(GeminiClient::new(&server.uri(), "test-key")))
    }

    async fn post_process(state: Arc<AppState>, body: serde_json::Value) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(PROCESS_PATH)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = router(state).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn gemini_reply(text: &str) -> String {
        serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_process_success() {
        let server = MockServer::start().await;
        Mock::given(matchers::method("POST"))
            .and(matchers::query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_string(gemini_reply("A short summary")))
            .expect(1)
            .mount(&server)
            .await;

        let state = state_for(&server);
        let (status, body) = post_process(
            state.clone(),
            serde_json::json!({ "content": "paper", "operation": "summarize" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("A short summary"));
        assert!(body.starts_with("✨ Here’s what I found:"));
        assert_eq!(state.processed_count.load(Ordering::Relaxed), 1);
    }

    #[tokio::test]
    async fn test_process_prompt_reaches_model() {
        let server = MockServer::start().await;
        Mock::given(matchers::method("POST"))
            .and(matchers::body_string_contains("Critically analyze the following research"))
            .and(matchers::body_string_contains("my findings"))
            .respond_with(ResponseTemplate::new(200).set_body_string(gemini_reply("ok")))
            .expect(1)
            .mount(&server)
            .await;

        let (status, _) = post_process(
            state_for(&server),
            serde_json::json!({ "content": "my findings", "operation": "ANALYZE" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_process_unknown_operation() {
        let server = MockServer::start().await;
        Mock::given(matchers::method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let (status, body) = post_process(
            state_for(&server),
            serde_json::json!({ "content": "x", "operation": "translate" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Unknown Operation: translate");
    }

    #[tokio::test]
    async fn test_process_missing_operation() {
        let server = MockServer::start().await;

        let (status, body) =
            post_process(state_for(&server), serde_json::json!({ "content": "x" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.starts_with("Invalid request"));
    }

    #[tokio::test]
    async fn test_process_upstream_error_is_text() {
        let server = MockServer::start().await;
        Mock::given(matchers::method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let state = state_for(&server);
        let (status, body) = post_process(
            state.clone(),
            serde_json::json!({ "content": "x", "operation": "suggest" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("Error: "));
        assert!(body.contains("500"));
        assert_eq!(state.processed_count.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn test_process_unreachable_model_is_text() {
        // Nothing listens on port 9 on a test host
        let state = Arc::new(AppState::new(GeminiClient::new(
            "http://127.0.0.1:9/v1/generate",
            "test-key",
        )));

        let (status, body) = post_process(
            state.clone(),
            serde_json::json!({ "content": "x", "operation": "analyze" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("Error: Gemini API request failed"));
        assert_eq!(state.processed_count.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn test_process_empty_candidates() {
        let server = MockServer::start().await;
        Mock::given(matchers::method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"candidates": []}"#))
            .mount(&server)
            .await;

        let (_, body) = post_process(
            state_for(&server),
            serde_json::json!({ "content": "x", "operation": "summarize" }),
        )
        .await;

        assert_eq!(body, prompt::NO_VALID_RESPONSE);
    }

    #[tokio::test]
    async fn test_process_unparsable_model_response() {
        let server = MockServer::start().await;
        Mock::given(matchers::method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let (_, body) = post_process(
            state_for(&server),
            serde_json::json!({ "content": "x", "operation": "summarize" }),
        )
        .await;

        assert!(body.starts_with("Error Processing Response: "));
    }

    #[tokio::test]
    async fn test_status() {
        let server = MockServer::start().await;
        let request = Request::builder()
            .uri("/api/research/status")
            .body(Body::empty())
            .unwrap();

        let response = router(state_for(&server)).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let status: ServiceStatus = serde_json::from_slice(&bytes).unwrap();
        assert!(status.running);
        assert_eq!(status.total_processed, 0);
        assert_eq!(status.model_host, "127.0.0.1");
    }
}
