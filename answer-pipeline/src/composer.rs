use common::storage::{corpus::DocumentStore, types::category::Category};
use retrieval_pipeline::{retrieve, RetrievalTuning, RetrievedChunk};
use serde::Serialize;
use tokio::time::timeout;
use tracing::{error, info, instrument};

use crate::generator::{AnswerGenerator, GenerationSettings};
use crate::prompts;

/// Final response handed to the caller. Every failure mode degrades into a
/// well-formed value of this type; the request path never surfaces an error.
#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    pub text: String,
    pub sources: Vec<String>,
    pub category: Category,
    /// Heuristic 0-100 score derived from retrieval scores, not a calibrated
    /// probability.
    pub confidence: f32,
}

impl Answer {
    fn no_data(category: Category) -> Self {
        Self {
            text: prompts::no_data_message(category).to_owned(),
            sources: Vec::new(),
            category,
            confidence: 0.0,
        }
    }

    fn degraded(category: Category) -> Self {
        Self {
            text: prompts::FALLBACK_MESSAGE.to_owned(),
            sources: Vec::new(),
            category,
            confidence: 0.0,
        }
    }
}

/// Answers a question in two stages: retrieve supporting chunks, then
/// delegate to the generator with a category-specific system prompt.
///
/// Empty retrieval is a terminal non-error path (templated "no data" reply).
/// A failing, empty or timed-out generation call degrades to an apology
/// reply; it is logged but never propagated and never retried.
#[instrument(skip_all, fields(query_chars = query.chars().count()))]
pub async fn compose_answer(
    store: &DocumentStore,
    generator: &dyn AnswerGenerator,
    query: &str,
    tuning: &RetrievalTuning,
    settings: &GenerationSettings,
) -> Answer {
    let chunks = store.all_chunks().await;
    let outcome = retrieve(&chunks, query, tuning);

    if outcome.results.is_empty() {
        info!(category = %outcome.category, "No chunks cleared the threshold, returning no-data reply");
        return Answer::no_data(outcome.category);
    }

    let confidence = confidence_from_scores(&outcome.results);
    let sources = collect_sources(&outcome.results);
    let system_prompt = prompts::system_prompt_for(outcome.category);
    let user_prompt = build_user_prompt(&build_context(&outcome.results), query);

    let generation = timeout(
        settings.timeout,
        generator.generate(
            &system_prompt,
            &user_prompt,
            settings.max_tokens,
            settings.temperature,
        ),
    )
    .await;

    match generation {
        Ok(Ok(text)) if !text.trim().is_empty() => {
            info!(
                category = %outcome.category,
                sources = sources.len(),
                confidence,
                "Composed answer"
            );
            Answer {
                text,
                sources,
                category: outcome.category,
                confidence,
            }
        }
        Ok(Ok(_)) => {
            error!(category = %outcome.category, "Generation returned an empty completion");
            Answer::degraded(outcome.category)
        }
        Ok(Err(e)) => {
            error!(category = %outcome.category, error = %e, "Generation call failed");
            Answer::degraded(outcome.category)
        }
        Err(_) => {
            error!(
                category = %outcome.category,
                timeout_secs = settings.timeout.as_secs(),
                "Generation call timed out"
            );
            Answer::degraded(outcome.category)
        }
    }
}

/// Concatenates retrieved chunks into one context block, each delimited and
/// attributed to its source document.
fn build_context(results: &[RetrievedChunk]) -> String {
    results
        .iter()
        .map(|retrieved| {
            format!(
                "[Source: {}]\n{}",
                retrieved.chunk.metadata.source, retrieved.chunk.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n---\n\n")
}

fn build_user_prompt(context: &str, query: &str) -> String {
    format!(
        r"
Context Information:
==================
{context}

User Question:
==================
{query}
"
    )
}

/// Source labels in first-seen order, deduplicated.
fn collect_sources(results: &[RetrievedChunk]) -> Vec<String> {
    let mut sources: Vec<String> = Vec::new();
    for retrieved in results {
        let source = &retrieved.chunk.metadata.source;
        if !sources.iter().any(|s| s == source) {
            sources.push(source.clone());
        }
    }
    sources
}

/// `min(avg_score * 20, 100)`: a rough confidence signal for the UI.
fn confidence_from_scores(results: &[RetrievedChunk]) -> f32 {
    if results.is_empty() {
        return 0.0;
    }
    let avg = results.iter().map(|r| r.score).sum::<f32>() / results.len() as f32;
    (avg * 20.0).min(100.0)
}
