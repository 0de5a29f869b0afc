//! HTTP API for UI component generation.

use crate::prompt;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, instrument};
use uismith_core::{GenerateRequest, Message};
use uismith_interface::TextGenerator;

/// API server state.
#[derive(Clone)]
pub struct ApiState {
    /// Generation backend (the tier stack in production, mocks in tests).
    pub generator: Arc<dyn TextGenerator>,
}

impl ApiState {
    /// Creates a new API state.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }
}

/// Creates the API router.
pub fn create_router(generator: Arc<dyn TextGenerator>) -> Router {
    let state = ApiState { generator };

    Router::new()
        .route("/health", get(health_check))
        .route("/generate", post(generate))
        .with_state(state)
}

/// Body of a generation request.
///
/// Absent fields default to empty strings so a missing prompt surfaces as
/// a 400 rather than a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateBody {
    /// Free-text description of the desired component
    #[serde(default)]
    pub prompt: String,
    /// Target UI framework name, interpolated as-is
    #[serde(default)]
    pub framework: String,
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Generate a UI component as a complete HTML document.
#[instrument(skip(state, body), fields(framework = %body.framework))]
async fn generate(
    State(state): State<ApiState>,
    Json(body): Json<GenerateBody>,
) -> impl IntoResponse {
    if body.prompt.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Prompt is required" })),
        );
    }

    let full_prompt = prompt::build_prompt(&body.framework, &body.prompt);
    let request = GenerateRequest::builder()
        .messages(vec![Message::user_text(full_prompt)])
        .build()
        .unwrap_or_default();

    match state.generator.generate(&request).await {
        Ok(response) => match response.first_text() {
            Some(text) if !text.is_empty() => {
                (StatusCode::OK, Json(json!({ "result": text })))
            }
            // Call succeeded but nothing usable came back; distinct from a
            // provider failure.
            _ => {
                error!("Provider returned no extractable text");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "No output from model" })),
                )
            }
        },
        Err(e) => {
            // Provider detail stays in the logs.
            error!(error = %e, "Generation failed on both model tiers");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Generation service failed" })),
            )
        }
    }
}
