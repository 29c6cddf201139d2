use keyscope_application::use_cases::{
    CheckHealthUseCase, GetCacheReportUseCase, GetInfoSectionUseCase, GetKeyMemoryUseCase,
    GetLatencyEventsUseCase, GetLatestSampleUseCase, GetServerSummaryUseCase, GetSlowLogUseCase,
    InspectKeyUseCase, SearchByCidUseCase,
};
use keyscope_domain::config::DrupalConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct DrupalUseCases {
    pub get_report: Arc<GetCacheReportUseCase>,
    pub search_by_cid: Arc<SearchByCidUseCase>,
    pub settings: Arc<DrupalConfig>,
}

#[derive(Clone)]
pub struct KeyUseCases {
    pub inspect: Arc<InspectKeyUseCase>,
    pub memory: Arc<GetKeyMemoryUseCase>,
}

#[derive(Clone)]
pub struct ServerUseCases {
    pub health: Arc<CheckHealthUseCase>,
    pub summary: Arc<GetServerSummaryUseCase>,
    pub latest_sample: Arc<GetLatestSampleUseCase>,
    pub info_section: Arc<GetInfoSectionUseCase>,
    pub slow_log: Arc<GetSlowLogUseCase>,
    pub latency: Arc<GetLatencyEventsUseCase>,
}

#[derive(Clone)]
pub struct AppState {
    pub drupal: DrupalUseCases,
    pub keys: KeyUseCases,
    pub server: ServerUseCases,
}
