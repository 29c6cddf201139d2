use crate::{
    dto::{
        InfoSectionResponse, LatencyResponse, SlowLogQuery, SlowLogResponse, SummaryResponse,
    },
    errors::ApiError,
    state::AppState,
};
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use keyscope_domain::introspection::SLOWLOG_DEFAULT_COUNT;
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_summary")]
pub async fn get_summary(State(state): State<AppState>) -> Result<Json<SummaryResponse>, ApiError> {
    let sample = state.server.summary.execute().await?;
    debug!(dbsize = sample.dbsize, "Live summary retrieved");
    Ok(Json(SummaryResponse::from_sample(sample)))
}

#[instrument(skip(state), name = "api_get_latest_summary")]
pub async fn get_latest_summary(
    State(state): State<AppState>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let sample = state.server.latest_sample.execute().await?;
    Ok(Json(SummaryResponse::from_sample(sample)))
}

#[instrument(skip(state), name = "api_get_info_section")]
pub async fn get_info_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<Json<InfoSectionResponse>, ApiError> {
    let info = state.server.info_section.execute(&section).await?;
    Ok(Json(InfoSectionResponse {
        ok: true,
        section,
        info,
    }))
}

#[instrument(skip(state), name = "api_get_slow_log")]
pub async fn get_slow_log(
    State(state): State<AppState>,
    query: Result<Query<SlowLogQuery>, QueryRejection>,
) -> Result<Json<SlowLogResponse>, ApiError> {
    let Query(params) = query?;
    let count = params.count.unwrap_or(SLOWLOG_DEFAULT_COUNT);
    let entries = state.server.slow_log.execute(count).await?;
    debug!(entries = entries.len(), "Slow log retrieved");

    Ok(Json(SlowLogResponse {
        ok: true,
        count: entries.len(),
        entries: entries.into_iter().map(Into::into).collect(),
    }))
}

#[instrument(skip(state), name = "api_get_latency")]
pub async fn get_latency(State(state): State<AppState>) -> Result<Json<LatencyResponse>, ApiError> {
    let events = state.server.latency.execute().await?;
    Ok(Json(LatencyResponse {
        ok: true,
        events: events.into_iter().map(Into::into).collect(),
    }))
}
