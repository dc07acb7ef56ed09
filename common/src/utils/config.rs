use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Clone, Deserialize, Debug)]
pub struct AppConfig {
    pub openai_api_key: String,
    #[serde(default = "default_base_url")]
    pub openai_base_url: String,
    pub http_port: u16,
    #[serde(default = "default_answer_model")]
    pub answer_model: String,
    #[serde(default = "default_answer_max_tokens")]
    pub answer_max_tokens: u32,
    #[serde(default = "default_answer_temperature")]
    pub answer_temperature: f32,
    #[serde(default = "default_generation_timeout_secs")]
    pub generation_timeout_secs: u64,
    #[serde(default = "default_seed_corpus")]
    pub seed_corpus: bool,
    #[serde(default = "default_ingest_max_body_bytes")]
    pub ingest_max_body_bytes: usize,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_answer_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_answer_max_tokens() -> u32 {
    700
}

fn default_answer_temperature() -> f32 {
    0.4
}

fn default_generation_timeout_secs() -> u64 {
    30
}

fn default_seed_corpus() -> bool {
    true
}

fn default_ingest_max_body_bytes() -> usize {
    1_048_576
}

pub fn get_config() -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::with_name("config").required(false))
        .add_source(Environment::default())
        .build()?;

    config.try_deserialize()
}
