use std::sync::Arc;

use answer_pipeline::{AnswerGenerator, GenerationSettings};
use common::{storage::corpus::DocumentStore, utils::config::AppConfig};
use retrieval_pipeline::RetrievalTuning;

#[derive(Clone)]
pub struct ApiState {
    pub store: Arc<DocumentStore>,
    pub generator: Arc<dyn AnswerGenerator>,
    pub tuning: RetrievalTuning,
    pub generation: GenerationSettings,
    pub config: AppConfig,
}

impl ApiState {
    pub fn new(
        store: Arc<DocumentStore>,
        generator: Arc<dyn AnswerGenerator>,
        config: &AppConfig,
    ) -> Self {
        Self {
            store,
            generator,
            tuning: RetrievalTuning::default(),
            generation: GenerationSettings::from_config(config),
            config: config.clone(),
        }
    }
}
