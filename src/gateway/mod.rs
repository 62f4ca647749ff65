//! HTTP gateway - the chat API surface
//!
//! Thin layer over the orchestrator: schema validation, CORS, and a
//! single recovery point mapping orchestration failures to HTTP 500.

pub mod schema;

use axum::{
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use regex::Regex;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{error, info};

use crate::agent::{orchestrator, AgentFactory, Message};
use crate::config::Settings;
use crate::memory::ConversationMemory;
use schema::{ChatRequest, ChatResponse, HealthResponse};

/// Origins allowed to send credentialed requests in production
const PRODUCTION_ORIGIN_PATTERN: &str = r"^https://.*\.vercel\.app$";

// ---- App State ----

/// Shared request state
#[derive(Clone)]
pub struct AppState {
    settings: Settings,
    factory: Arc<AgentFactory>,
    memory: ConversationMemory,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let factory = Arc::new(AgentFactory::new(settings.clone()));
        AppState {
            settings,
            factory,
            memory: ConversationMemory::new(),
        }
    }
}

// ---- Error Handling ----

/// The one failure shape the chat endpoint can produce
struct AgentError(String);

impl IntoResponse for AgentError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "detail": format!("Agent Error: {}", self.0),
        }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

// ---- Handlers ----

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        name: state.settings.app_name.clone(),
        status: "running".to_string(),
        env: state.settings.env.clone(),
    })
}

async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "ok": true,
        "version": crate::VERSION,
        "routes": ["GET /health", "POST /v1/chat", "GET /"],
    }))
}

async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AgentError> {
    let factory = state.factory.clone();
    let memory = state.memory.clone();

    // Run on the worker pool so a panicking agent call is contained
    // instead of tearing down the connection task.
    let task = tokio::spawn(async move {
        orchestrator::respond(&factory, &memory, &req.messages, req.conversation_id).await
    });

    match task.await {
        Ok(Ok(reply)) => Ok(Json(ChatResponse {
            message: Message::assistant(reply),
        })),
        Ok(Err(e)) => {
            error!(error = %e, "chat orchestration failed");
            Err(AgentError(e.to_string()))
        }
        Err(join) => {
            error!(error = %join, "chat task aborted");
            Err(AgentError(join.to_string()))
        }
    }
}

// ---- CORS ----

/// Dev: any origin, no credentials. Prod: Vercel previews/production
/// only, credentials permitted; wildcards are illegal with credentials,
/// so methods and headers are listed explicitly.
fn cors_layer(settings: &Settings) -> CorsLayer {
    if !settings.is_production() {
        return CorsLayer::permissive();
    }

    let pattern = Regex::new(PRODUCTION_ORIGIN_PATTERN).expect("valid origin pattern");
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _| {
            origin.to_str().map(|o| pattern.is_match(o)).unwrap_or(false)
        }))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

// ---- Router ----

/// Build the router with routes, shared state, and CORS policy
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.settings);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/v1/chat", post(chat))
        .with_state(state)
        .layer(cors)
}

/// Bind and serve until the process is stopped
pub async fn serve(state: AppState, addr: SocketAddr) -> crate::Result<()> {
    let app = build_router(state);
    info!("gateway listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use secrecy::SecretString;
    use tower::ServiceExt;

    fn test_state(env: &str, key: Option<&str>) -> AppState {
        AppState::new(Settings {
            app_name: crate::config::APP_NAME.to_string(),
            env: env.to_string(),
            gemini_api_key: key.map(|k| SecretString::from(k.to_string())),
        })
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_is_ok_without_credential() {
        let app = build_router(test_state("local", None));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["ok"], true);
        assert_eq!(body["status"], "running");
        assert_eq!(body["env"], "local");
    }

    #[tokio::test]
    async fn test_index_lists_routes() {
        let app = build_router(test_state("local", None));
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["ok"], true);
        assert!(body["routes"].as_array().unwrap().len() >= 3);
    }

    #[tokio::test]
    async fn test_malformed_chat_body_is_422() {
        let app = build_router(test_state("local", Some("test-key")));
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/v1/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_chat_without_credential_is_500_agent_error() {
        let app = build_router(test_state("local", None));
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/v1/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"messages":[{"role":"user","content":"hi"}]}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_string(response).await;
        assert!(body.contains("Agent Error:"), "unexpected body: {body}");
        assert!(body.contains("GEMINI_API_KEY"), "unexpected body: {body}");
    }

    #[tokio::test]
    async fn test_dev_cors_allows_any_origin() {
        let app = build_router(test_state("local", None));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "http://localhost:5500")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .is_none());
    }

    #[tokio::test]
    async fn test_prod_cors_allows_vercel_origins_with_credentials() {
        let app = build_router(test_state("prod", None));
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/v1/chat")
                    .header(header::ORIGIN, "https://my-app-git-preview.vercel.app")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("https://my-app-git-preview.vercel.app")
        );
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .and_then(|v| v.to_str().ok()),
            Some("true")
        );
    }

    #[tokio::test]
    async fn test_prod_cors_rejects_other_origins() {
        let app = build_router(test_state("prod", None));
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/v1/chat")
                    .header(header::ORIGIN, "https://evil.example.com")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    #[ignore] // Requires actual API key
    async fn test_chat_round_trip_live() {
        let app = build_router(AppState::new(Settings::from_env()));
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/v1/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"messages":[{"role":"user","content":"Say hello in one word."}]}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["message"]["role"], "assistant");
        assert!(!body["message"]["content"].as_str().unwrap().is_empty());
    }
}
