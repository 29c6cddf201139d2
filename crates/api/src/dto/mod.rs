pub mod drupal;
pub mod keys;
pub mod server;

pub use drupal::{CacheReportResponse, CidSearchQuery, CidSearchResponse, SearchHitDto};
pub use keys::{KeyInspectionResponse, KeyMemoryResponse, KeyQuery};
pub use server::{
    HealthResponse, InfoSectionResponse, LatencyResponse, SlowLogQuery, SlowLogResponse,
    SummaryResponse,
};
