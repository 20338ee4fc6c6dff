// src/routes/mod.rs
pub mod run_flow;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use run_flow::run_flow_handler;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_router(state: SharedState) -> Router {
    let cors = cors_layer(&state);

    Router::new()
        .route("/run_flow", post(run_flow_handler))
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

// Credentials rule out wildcards, so methods and headers are mirrored instead.
fn cors_layer(state: &SharedState) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(state.config.cors_origins.iter().cloned()))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
