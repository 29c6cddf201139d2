use crate::{dto::HealthResponse, state::AppState};
use axum::{extract::State, Json};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_health_check")]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let up = state.server.health.execute().await;
    debug!(store_up = up, "Health check requested");

    Json(HealthResponse {
        ok: up,
        store: if up { "up" } else { "down" },
    })
}
