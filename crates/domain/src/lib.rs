//! Keyscope Domain Layer
pub mod cache_key;
pub mod cache_report;
pub mod cid_search;
pub mod config;
pub mod errors;
pub mod introspection;
pub mod key_inspection;
pub mod sample;
pub mod server_info;
pub mod ttl;

pub use cache_key::{
    build_search_pattern, decode, extract_cid_and_bin, CacheKeyRow, CidAndBin, ContextParams,
};
pub use cache_report::{
    AuthVsAnon, BinSummary, CacheReport, CacheReportBuilder, RouteSummary, VolumeSummary,
};
pub use cid_search::{CidFilter, CidSearchReport, SearchHit};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use introspection::{LatencyEvent, SlowLogEntry};
pub use key_inspection::{KeyInspection, KeyValue, ScoredMember};
pub use sample::InfoSample;
pub use server_info::{InfoSection, InfoValue, ServerInfo};
pub use ttl::Ttl;
