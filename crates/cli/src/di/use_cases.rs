use keyscope_api::{AppState, DrupalUseCases, KeyUseCases, ServerUseCases};
use keyscope_application::ports::KeyValueStore;
use keyscope_application::services::LatestSample;
use keyscope_application::use_cases::{
    CheckHealthUseCase, GetCacheReportUseCase, GetInfoSectionUseCase, GetKeyMemoryUseCase,
    GetLatencyEventsUseCase, GetLatestSampleUseCase, GetServerSummaryUseCase, GetSlowLogUseCase,
    InspectKeyUseCase, SearchByCidUseCase,
};
use keyscope_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub get_report: Arc<GetCacheReportUseCase>,
    pub search_by_cid: Arc<SearchByCidUseCase>,
    pub inspect_key: Arc<InspectKeyUseCase>,
    pub key_memory: Arc<GetKeyMemoryUseCase>,
    pub health: Arc<CheckHealthUseCase>,
    pub summary: Arc<GetServerSummaryUseCase>,
    pub latest_sample: Arc<GetLatestSampleUseCase>,
    pub info_section: Arc<GetInfoSectionUseCase>,
    pub slow_log: Arc<GetSlowLogUseCase>,
    pub latency: Arc<GetLatencyEventsUseCase>,
}

impl UseCases {
    pub fn new(store: Arc<dyn KeyValueStore>, config: &Config, latest: LatestSample) -> Self {
        let summary = Arc::new(GetServerSummaryUseCase::new(store.clone()));

        Self {
            get_report: Arc::new(GetCacheReportUseCase::new(store.clone())),
            search_by_cid: Arc::new(SearchByCidUseCase::new(store.clone())),
            inspect_key: Arc::new(InspectKeyUseCase::new(
                store.clone(),
                config.store.inspect_max_elements,
            )),
            key_memory: Arc::new(GetKeyMemoryUseCase::new(store.clone())),
            health: Arc::new(CheckHealthUseCase::new(store.clone())),
            latest_sample: Arc::new(GetLatestSampleUseCase::new(latest, summary.clone())),
            info_section: Arc::new(GetInfoSectionUseCase::new(store.clone())),
            slow_log: Arc::new(GetSlowLogUseCase::new(store.clone())),
            latency: Arc::new(GetLatencyEventsUseCase::new(store)),
            summary,
        }
    }

    pub fn app_state(&self, config: &Config) -> AppState {
        AppState {
            drupal: DrupalUseCases {
                get_report: self.get_report.clone(),
                search_by_cid: self.search_by_cid.clone(),
                settings: Arc::new(config.drupal.clone()),
            },
            keys: KeyUseCases {
                inspect: self.inspect_key.clone(),
                memory: self.key_memory.clone(),
            },
            server: ServerUseCases {
                health: self.health.clone(),
                summary: self.summary.clone(),
                latest_sample: self.latest_sample.clone(),
                info_section: self.info_section.clone(),
                slow_log: self.slow_log.clone(),
                latency: self.latency.clone(),
            },
        }
    }
}
