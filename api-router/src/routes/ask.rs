use answer_pipeline::{compose_answer, Answer};
use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::api_state::ApiState;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub query: String,
}

/// Answers a free-text question against the corpus.
///
/// Composition never fails: blank queries, empty retrieval and generation
/// outages all come back as well-formed answers with `confidence = 0`, so
/// this handler has no error branch.
pub async fn ask(State(state): State<ApiState>, Json(payload): Json<AskRequest>) -> Json<Answer> {
    info!(
        query_chars = payload.query.chars().count(),
        "Received question"
    );

    let answer = compose_answer(
        &state.store,
        state.generator.as_ref(),
        &payload.query,
        &state.tuning,
        &state.generation,
    )
    .await;

    Json(answer)
}
