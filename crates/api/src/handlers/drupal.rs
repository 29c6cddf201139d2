use crate::{
    dto::{CacheReportResponse, CidSearchQuery, CidSearchResponse},
    errors::ApiError,
    state::AppState,
};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use keyscope_application::use_cases::{CacheReportRequest, CidSearchRequest};
use tracing::{debug, instrument};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/drupal/report", get(get_cache_report))
        .route("/drupal/search", get(search_by_cid))
}

#[instrument(skip(state), name = "api_drupal_report")]
async fn get_cache_report(
    State(state): State<AppState>,
) -> Result<Json<CacheReportResponse>, ApiError> {
    let settings = &state.drupal.settings;
    let request = CacheReportRequest {
        prefix: settings.prefix.clone(),
        scan_cap: settings.scan_cap,
        scan_count: settings.scan_count,
        top_limit: settings.top_routes_limit,
    };

    let report = state.drupal.get_report.execute(&request).await?;
    debug!(scanned = report.scanned, bins = report.bins.len(), "Drupal report ready");

    Ok(Json(CacheReportResponse::from_report(report)))
}

#[instrument(skip(state), name = "api_drupal_search")]
async fn search_by_cid(
    State(state): State<AppState>,
    query: Result<Query<CidSearchQuery>, QueryRejection>,
) -> Result<Json<CidSearchResponse>, ApiError> {
    let Query(params) = query?;
    let settings = &state.drupal.settings;
    let limit = params
        .limit
        .unwrap_or(settings.search_limit)
        .min(settings.search_limit)
        .max(1);

    let request = CidSearchRequest {
        prefix: settings.prefix.clone(),
        cid: params.cid.map(|c| c.trim().to_string()).unwrap_or_default(),
        bin: params
            .bin
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty()),
        limit,
        max_round_trips: settings.search_max_round_trips,
        count_hint: settings.search_count,
    };

    let report = state.drupal.search_by_cid.execute(&request).await?;
    debug!(cid = %report.cid, matches = report.hits.len(), "CID search done");

    Ok(Json(CidSearchResponse::from_report(report)))
}
