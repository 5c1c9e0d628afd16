//! API routes for the debate gateway

use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::state::AppState;

/// The companion page, compiled into the binary.
const INDEX_PAGE: &str = include_str!("../assets/index.html");

/// Debate request
#[derive(Debug, Deserialize)]
pub struct DebateRequest {
    pub topic: String,
}

/// Debate response
#[derive(Debug, Serialize)]
pub struct DebateResponse {
    pub dialogue: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Run a philosophical debate on the posted topic
pub async fn debate(
    State(state): State<AppState>,
    Json(request): Json<DebateRequest>,
) -> ApiResult<Json<DebateResponse>> {
    tracing::info!(topic = %request.topic, "debate requested");
    let dialogue = state.pipeline().dialogue(&request.topic).await?;
    Ok(Json(DebateResponse { dialogue }))
}

/// Health check handler
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Serve the companion page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// Build the API router
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/debate", post(debate))
        .with_state(state)
}
