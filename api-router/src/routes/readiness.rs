use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::api_state::ApiState;

/// Readiness probe: the corpus is process-local, so readiness amounts to the
/// store being reachable. Reports the current chunk count for visibility.
pub async fn ready(State(state): State<ApiState>) -> impl IntoResponse {
    let corpus_size = state.store.len().await;
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "checks": { "corpus_chunks": corpus_size }
        })),
    )
}
