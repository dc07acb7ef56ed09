use std::sync::Arc;

use answer_pipeline::{AnswerGenerator, OpenAiGenerator};
use api_router::{api_routes_v1, api_state::ApiState};
use axum::Router;
use common::{
    storage::{corpus::DocumentStore, seed},
    utils::config::get_config,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();

    // Get config
    let config = get_config()?;

    // Build the corpus store and load the bundled reference documents
    let store = Arc::new(DocumentStore::new());
    if config.seed_corpus {
        seed::seed_corpus(&store).await?;
    }

    // Generator backed by the configured completion endpoint
    let openai_client = Arc::new(async_openai::Client::with_config(
        async_openai::config::OpenAIConfig::new()
            .with_api_key(&config.openai_api_key)
            .with_api_base(&config.openai_base_url),
    ));
    let generator: Arc<dyn AnswerGenerator> = Arc::new(OpenAiGenerator::new(
        openai_client,
        config.answer_model.clone(),
    ));

    let api_state = ApiState::new(store, generator, &config);

    // Create Axum router
    let app = Router::new()
        .nest("/api/v1", api_routes_v1(&api_state))
        .with_state(api_state);

    info!("Starting server listening on 0.0.0.0:{}", config.http_port);
    let serve_address = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(serve_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
