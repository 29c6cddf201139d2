use crate::{
    dto::{KeyInspectionResponse, KeyMemoryResponse, KeyQuery},
    errors::ApiError,
    state::AppState,
};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_inspect_key")]
pub async fn inspect_key(
    State(state): State<AppState>,
    query: Result<Query<KeyQuery>, QueryRejection>,
) -> Result<Json<KeyInspectionResponse>, ApiError> {
    let Query(params) = query?;
    let key = params.key.unwrap_or_default();
    let inspection = state.keys.inspect.execute(&key).await?;
    debug!(key = %inspection.key, key_type = %inspection.key_type, "Key inspected");

    Ok(Json(KeyInspectionResponse::from_inspection(inspection)))
}

#[instrument(skip(state), name = "api_key_memory")]
pub async fn get_key_memory(
    State(state): State<AppState>,
    query: Result<Query<KeyQuery>, QueryRejection>,
) -> Result<Json<KeyMemoryResponse>, ApiError> {
    let Query(params) = query?;
    let key = params.key.unwrap_or_default();
    let bytes = state.keys.memory.execute(&key).await?;

    Ok(Json(KeyMemoryResponse {
        ok: true,
        key,
        bytes,
    }))
}
