use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/summary", get(handlers::get_summary))
        .route("/summary/latest", get(handlers::get_latest_summary))
        .route("/info/{section}", get(handlers::get_info_section))
        .route("/slowlog", get(handlers::get_slow_log))
        .route("/latency", get(handlers::get_latency))
        .route("/keys/inspect", get(handlers::inspect_key))
        .route("/keys/memory", get(handlers::get_key_memory))
        .merge(handlers::drupal::routes())
        .with_state(state)
}
