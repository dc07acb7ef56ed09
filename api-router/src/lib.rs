use axum::{
    extract::{DefaultBodyLimit, FromRef},
    routing::{get, post},
    Router,
};
use routes::{
    ask::ask,
    documents::{add_documents, list_documents},
    liveness::live,
    readiness::ready,
};

pub mod api_state;
pub mod error;
mod routes;

use api_state::ApiState;

/// Router for API functionality, version 1
pub fn api_routes_v1<S>(app_state: &ApiState) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    ApiState: FromRef<S>,
{
    // Probe endpoints (for k8s/systemd probes)
    let probes = Router::new()
        .route("/ready", get(ready))
        .route("/live", get(live));

    let api = Router::new()
        .route("/ask", post(ask))
        .route(
            "/documents",
            post(add_documents)
                .get(list_documents)
                .layer(DefaultBodyLimit::max(app_state.config.ingest_max_body_bytes)),
        );

    probes.merge(api)
}
