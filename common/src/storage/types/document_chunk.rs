use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

use super::category::Category;

/// Attribution and classification attached to every corpus chunk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    pub source: String,
    pub category: Category,
    pub uploaded_at: DateTime<Utc>,
}

/// One retrievable unit of source material. Chunks are append-only: once in
/// the corpus they are never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentChunk {
    pub id: String,
    pub content: String,
    pub metadata: ChunkMetadata,
    pub keywords: Vec<String>,
}

/// Ingestion payload for a single chunk, before id assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkInput {
    pub content: String,
    pub source: String,
    pub category: Category,
    pub keywords: Vec<String>,
}

impl ChunkInput {
    pub fn new(
        content: impl Into<String>,
        source: impl Into<String>,
        category: Category,
        keywords: &[&str],
    ) -> Self {
        Self {
            content: content.into(),
            source: source.into(),
            category,
            keywords: keywords.iter().map(|k| (*k).to_owned()).collect(),
        }
    }

    /// Checks required fields and normalizes keywords to lowercase.
    ///
    /// Every chunk must carry at least one keyword, otherwise it could never
    /// be found by keyword match and would only surface via category fallback.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.content.trim().is_empty() {
            return Err(AppError::Validation(
                "document chunk is missing content".into(),
            ));
        }
        if self.source.trim().is_empty() {
            return Err(AppError::Validation(
                "document chunk is missing a source label".into(),
            ));
        }
        if !self.keywords.iter().any(|k| !k.trim().is_empty()) {
            return Err(AppError::Validation(format!(
                "document chunk from '{}' has no keywords",
                self.source
            )));
        }
        Ok(())
    }
}

impl DocumentChunk {
    /// Materializes a validated input into a corpus chunk with a fresh id.
    pub fn from_input(input: ChunkInput) -> Self {
        let keywords = input
            .keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        Self {
            id: Uuid::new_v4().to_string(),
            content: input.content,
            metadata: ChunkMetadata {
                source: input.source,
                category: input.category,
                uploaded_at: Utc::now(),
            },
            keywords,
        }
    }
}
