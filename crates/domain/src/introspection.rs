/// One entry of the store's slow-query log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlowLogEntry {
    pub id: i64,
    /// Unix seconds when the command was processed
    pub timestamp: i64,
    pub duration_micros: u64,
    pub command: Vec<String>,
    pub client_addr: Option<String>,
    pub client_name: Option<String>,
}

/// Latest spike recorded by the store's latency monitor for one event class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatencyEvent {
    pub event: String,
    pub timestamp: i64,
    pub latest_ms: u64,
    pub max_ms: u64,
}

pub const SLOWLOG_DEFAULT_COUNT: usize = 25;
pub const SLOWLOG_MAX_COUNT: usize = 128;
