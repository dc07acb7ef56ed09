use serde::{Deserialize, Serialize};

/// Tunable parameters that govern scoring and result selection.
///
/// The defaults reproduce the weighted scoring variant: tokens shorter than
/// `min_token_len` are discarded, keyword hits count triple a plain content
/// hit, and a flat bonus rewards chunks in the query's own category. Scores
/// are per-token averages, so the threshold is on the same scale regardless
/// of query length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalTuning {
    pub top_k: usize,
    pub score_threshold: f32,
    pub keyword_match_weight: f32,
    pub content_match_weight: f32,
    pub category_bonus: f32,
    pub min_token_len: usize,
}

impl Default for RetrievalTuning {
    fn default() -> Self {
        Self {
            top_k: 5,
            score_threshold: 0.5,
            keyword_match_weight: 3.0,
            content_match_weight: 1.0,
            category_bonus: 2.0,
            min_token_len: 3,
        }
    }
}

impl RetrievalTuning {
    pub fn with_top_k(top_k: usize) -> Self {
        Self {
            top_k,
            ..Self::default()
        }
    }
}
