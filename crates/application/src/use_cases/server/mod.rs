pub mod check_health;
pub mod get_info_section;
pub mod get_latency_events;
pub mod get_latest_sample;
pub mod get_server_summary;
pub mod get_slow_log;

pub use check_health::CheckHealthUseCase;
pub use get_info_section::GetInfoSectionUseCase;
pub use get_latency_events::GetLatencyEventsUseCase;
pub use get_latest_sample::GetLatestSampleUseCase;
pub use get_server_summary::GetServerSummaryUseCase;
pub use get_slow_log::GetSlowLogUseCase;
