pub mod get_cache_report;
pub mod search_by_cid;

pub use get_cache_report::{CacheReportRequest, GetCacheReportUseCase};
pub use search_by_cid::{CidSearchRequest, SearchByCidUseCase};
