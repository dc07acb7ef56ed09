use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use common::storage::types::{category::Category, document_chunk::ChunkInput};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::{api_state::ApiState, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct AddDocumentsRequest {
    pub documents: Vec<ChunkInput>,
}

/// Listing entry: chunk contents are not echoed back, only attribution.
#[derive(Debug, Serialize)]
pub struct DocumentSummary {
    pub id: String,
    pub source: String,
    pub category: Category,
    pub uploaded_at: DateTime<Utc>,
}

/// Appends uploaded document chunks to the corpus.
pub async fn add_documents(
    State(state): State<ApiState>,
    Json(payload): Json<AddDocumentsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if payload.documents.is_empty() {
        return Err(ApiError::ValidationError(
            "no documents in request".to_string(),
        ));
    }

    let ids = state.store.add_chunks(payload.documents).await?;
    info!(added = ids.len(), "Ingested documents");

    Ok((
        StatusCode::OK,
        Json(json!({ "status": "success", "added": ids.len(), "ids": ids })),
    ))
}

/// Lists the current corpus, in insertion order.
pub async fn list_documents(State(state): State<ApiState>) -> Json<serde_json::Value> {
    let chunks = state.store.all_chunks().await;
    let documents: Vec<DocumentSummary> = chunks
        .into_iter()
        .map(|chunk| DocumentSummary {
            id: chunk.id,
            source: chunk.metadata.source,
            category: chunk.metadata.category,
            uploaded_at: chunk.metadata.uploaded_at,
        })
        .collect();

    Json(json!({ "count": documents.len(), "documents": documents }))
}
