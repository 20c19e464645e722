//! HTTP request handlers

use super::types::{ApiResponse, ErrorResponse, HealthResponse, ModelInfo};
use super::AppState;
use crate::relay::{ApiError, MAX_OUTPUT_TOKENS, MODEL_ID};
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, DefaultBodyLimit, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;

/// Largest relay body accepted. Every call replays the whole conversation,
/// so this sits well above axum's 2 MB default.
pub const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    router_with_body_limit(state, MAX_BODY_BYTES)
}

fn router_with_body_limit(state: AppState, body_limit: usize) -> Router {
    Router::new()
        // Relay endpoint
        .route(
            "/api/claude",
            post(relay_chat).layer(DefaultBodyLimit::max(body_limit)),
        )
        // Model info
        .route("/api/model", get(get_model))
        // Liveness
        .route("/health", get(health))
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Relay
// ============================================================

/// The body is decoded by hand so that a missing content type or broken
/// JSON becomes the same 400 as a missing `messages` array. A body that
/// cannot be read still answers with the JSON error envelope.
async fn relay_chat(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ApiResponse>, ApiError> {
    let body = body.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Relay request body rejected");
        ApiError::UnreadableBody {
            status: rejection.status().as_u16(),
            message: rejection.body_text(),
        }
    })?;

    let body: Value = serde_json::from_slice(&body).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "Relay request body is not JSON");
        Value::Null
    });

    state.relay.handle(&body).await.map(Json)
}

// ============================================================
// Info
// ============================================================

async fn get_model() -> Json<ModelInfo> {
    Json(ModelInfo {
        model: MODEL_ID,
        max_tokens: MAX_OUTPUT_TOKENS,
    })
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

async fn get_version() -> &'static str {
    concat!("claudius ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse::new(self.to_string()));
        (status, body).into_response()
    }
}
