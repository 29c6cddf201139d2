pub mod drupal;
pub mod health;
pub mod keys;
pub mod server;

pub use health::health_check;
pub use keys::{get_key_memory, inspect_key};
pub use server::{get_info_section, get_latency, get_latest_summary, get_slow_log, get_summary};
