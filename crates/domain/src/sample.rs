use crate::server_info::ServerInfo;
use chrono::{DateTime, Utc};

/// Point-in-time view of the store used by the summary panel.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoSample {
    pub captured_at: DateTime<Utc>,
    pub dbsize: u64,
    pub info: ServerInfo,
}
