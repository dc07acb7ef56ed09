use common::storage::types::{category::Category, document_chunk::DocumentChunk};

use crate::config::RetrievalTuning;

/// Splits text into lowercase tokens on non-alphanumeric boundaries,
/// discarding tokens shorter than `min_token_len`.
pub fn tokenize(text: &str, min_token_len: usize) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.len() >= min_token_len)
        .map(str::to_owned)
        .collect()
}

/// Scores one chunk against an already-tokenized query.
///
/// Per token: `keyword_match_weight` when any chunk keyword is in a substring
/// relation with the token (either direction), `content_match_weight` when
/// any content word is. One flat `category_bonus` when the classified query
/// category equals the chunk category. The sum is averaged over the token
/// count; an empty token list short-circuits to 0 rather than dividing by
/// zero.
pub fn score_chunk(
    tokens: &[String],
    query_category: Category,
    chunk: &DocumentChunk,
    tuning: &RetrievalTuning,
) -> f32 {
    if tokens.is_empty() {
        return 0.0;
    }

    let content_words = tokenize(&chunk.content, tuning.min_token_len);

    let mut score = 0.0_f32;
    for token in tokens {
        if chunk
            .keywords
            .iter()
            .any(|keyword| keyword.contains(token.as_str()) || token.contains(keyword.as_str()))
        {
            score += tuning.keyword_match_weight;
        }
        if content_words
            .iter()
            .any(|word| word.contains(token.as_str()) || token.contains(word.as_str()))
        {
            score += tuning.content_match_weight;
        }
    }

    if query_category == chunk.metadata.category {
        score += tuning.category_bonus;
    }

    score / tokens.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::storage::types::document_chunk::ChunkInput;

    fn chunk(category: Category, content: &str, keywords: &[&str]) -> DocumentChunk {
        DocumentChunk::from_input(ChunkInput::new(content, "Test Source", category, keywords))
    }

    fn tuning() -> RetrievalTuning {
        RetrievalTuning::default()
    }

    #[test]
    fn tokenize_drops_short_tokens_and_punctuation() {
        let tokens = tokenize("What is a SIP, really?", 3);
        assert_eq!(tokens, vec!["what", "sip", "really"]);
    }

    #[test]
    fn empty_query_scores_zero_without_panicking() {
        let c = chunk(Category::MutualFund, "SIP basics", &["sip"]);
        let tokens = tokenize("", 3);
        assert_eq!(score_chunk(&tokens, Category::General, &c, &tuning()), 0.0);

        let tokens = tokenize("   \t  ", 3);
        assert_eq!(score_chunk(&tokens, Category::General, &c, &tuning()), 0.0);
    }

    #[test]
    fn keyword_hit_outweighs_content_hit() {
        let keyword_only = chunk(Category::General, "nothing relevant here", &["sip"]);
        let content_only = chunk(
            Category::General,
            "a sip of tea every morning",
            &["unrelated"],
        );

        let tokens = tokenize("sip", 3);
        let keyword_score = score_chunk(&tokens, Category::General, &keyword_only, &tuning());
        let content_score = score_chunk(&tokens, Category::General, &content_only, &tuning());

        assert!(keyword_score > content_score);
    }

    #[test]
    fn substring_relation_matches_both_directions() {
        // Token contained in a longer keyword.
        let c = chunk(Category::General, "irrelevant", &["expense ratio"]);
        let tokens = tokenize("expense", 3);
        assert!(score_chunk(&tokens, Category::General, &c, &tuning()) > 0.0);

        // Keyword contained in a longer token.
        let c = chunk(Category::General, "irrelevant", &["gold"]);
        let tokens = tokenize("golden", 3);
        assert!(score_chunk(&tokens, Category::General, &c, &tuning()) > 0.0);
    }

    #[test]
    fn category_match_adds_flat_bonus() {
        let c = chunk(Category::Gold, "bullion storage notes", &["bullion"]);
        let tokens = tokenize("bullion", 3);

        let matched = score_chunk(&tokens, Category::Gold, &c, &tuning());
        let unmatched = score_chunk(&tokens, Category::Tax, &c, &tuning());
        // One token, so the flat bonus shows up undivided.
        assert!((matched - unmatched - tuning().category_bonus).abs() < f32::EPSILON);
    }

    #[test]
    fn score_is_a_per_token_average() {
        let c = chunk(Category::General, "irrelevant", &["sip"]);

        let one_hit = score_chunk(&tokenize("sip", 3), Category::General, &c, &tuning());
        let diluted = score_chunk(
            &tokenize("sip unrelatedword anotherword", 3),
            Category::General,
            &c,
            &tuning(),
        );

        assert!((one_hit - 3.0).abs() < f32::EPSILON);
        assert!((diluted - 1.0).abs() < f32::EPSILON);
    }
}
