pub mod drupal;
pub mod keys;
pub mod server;

pub use drupal::{CacheReportRequest, CidSearchRequest, GetCacheReportUseCase, SearchByCidUseCase};
pub use keys::{GetKeyMemoryUseCase, InspectKeyUseCase};
pub use server::{
    CheckHealthUseCase, GetInfoSectionUseCase, GetLatencyEventsUseCase, GetLatestSampleUseCase,
    GetServerSummaryUseCase, GetSlowLogUseCase,
};
