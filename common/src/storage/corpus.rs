use tokio::sync::RwLock;
use tracing::info;

use crate::error::AppError;

use super::types::document_chunk::{ChunkInput, DocumentChunk};

/// In-memory, append-only corpus.
///
/// Constructed once at startup and passed around as an `Arc` handle; the
/// write lock serializes concurrent appends while readers take cloned
/// snapshots. There is no deletion path and no size bound; corpus sizes are
/// expected to stay in the tens of chunks.
#[derive(Debug, Default)]
pub struct DocumentStore {
    chunks: RwLock<Vec<DocumentChunk>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the given chunks, assigning each a fresh unique id.
    ///
    /// Validation is all-or-nothing: if any input is malformed the corpus is
    /// left untouched. Returns the assigned ids in input order.
    pub async fn add_chunks(&self, inputs: Vec<ChunkInput>) -> Result<Vec<String>, AppError> {
        for input in &inputs {
            input.validate()?;
        }

        let new_chunks: Vec<DocumentChunk> =
            inputs.into_iter().map(DocumentChunk::from_input).collect();
        let ids: Vec<String> = new_chunks.iter().map(|c| c.id.clone()).collect();

        let mut chunks = self.chunks.write().await;
        chunks.extend(new_chunks);
        info!(
            added = ids.len(),
            corpus_size = chunks.len(),
            "Appended chunks to corpus"
        );

        Ok(ids)
    }

    /// Read-only snapshot of the full corpus, in insertion order.
    pub async fn all_chunks(&self) -> Vec<DocumentChunk> {
        self.chunks.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.chunks.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.chunks.read().await.is_empty()
    }
}
