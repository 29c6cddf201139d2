use keyscope_domain::{InfoSample, LatencyEvent, ServerInfo, SlowLogEntry};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug, Clone)]
pub struct HealthResponse {
    pub ok: bool,
    pub store: &'static str,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub ok: bool,
    pub captured_at: String,
    pub dbsize: u64,
    pub info: ServerInfo,
}

impl SummaryResponse {
    pub fn from_sample(sample: InfoSample) -> Self {
        Self {
            ok: true,
            captured_at: sample.captured_at.to_rfc3339(),
            dbsize: sample.dbsize,
            info: sample.info,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct InfoSectionResponse {
    pub ok: bool,
    pub section: String,
    pub info: ServerInfo,
}

#[derive(Deserialize, Debug, Default)]
pub struct SlowLogQuery {
    #[serde(default)]
    pub count: Option<usize>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SlowLogEntryDto {
    pub id: i64,
    pub timestamp: i64,
    pub duration_micros: u64,
    pub command: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_addr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
}

impl From<SlowLogEntry> for SlowLogEntryDto {
    fn from(e: SlowLogEntry) -> Self {
        Self {
            id: e.id,
            timestamp: e.timestamp,
            duration_micros: e.duration_micros,
            command: e.command,
            client_addr: e.client_addr,
            client_name: e.client_name,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct SlowLogResponse {
    pub ok: bool,
    pub count: usize,
    pub entries: Vec<SlowLogEntryDto>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LatencyEventDto {
    pub event: String,
    pub timestamp: i64,
    pub latest_ms: u64,
    pub max_ms: u64,
}

impl From<LatencyEvent> for LatencyEventDto {
    fn from(e: LatencyEvent) -> Self {
        Self {
            event: e.event,
            timestamp: e.timestamp,
            latest_ms: e.latest_ms,
            max_ms: e.max_ms,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct LatencyResponse {
    pub ok: bool,
    pub events: Vec<LatencyEventDto>,
}
