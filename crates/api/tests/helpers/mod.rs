#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use keyscope_api::{create_api_routes, AppState, DrupalUseCases, KeyUseCases, ServerUseCases};
use keyscope_application::ports::{KeyValueStore, ScanBatch};
use keyscope_application::services::LatestSample;
use keyscope_application::use_cases::*;
use keyscope_domain::config::DrupalConfig;
use keyscope_domain::{DomainError, LatencyEvent, ScoredMember, SlowLogEntry};
use std::collections::BTreeMap;
use std::sync::Arc;

pub const INFO: &str = "# Server\r\nredis_version:7.2.4\r\n\r\n# Memory\r\nused_memory:4096\r\n";

/// Single-page store: every SCAN returns all matching keys with cursor 0.
/// String values only; `down` makes every command fail as unreachable.
#[derive(Default)]
pub struct StubStore {
    keys: BTreeMap<String, (String, i64, Option<u64>)>,
    down: bool,
}

impl StubStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn down() -> Self {
        Self {
            down: true,
            ..Self::default()
        }
    }

    pub fn with_key(mut self, key: &str, value: &str, ttl: i64, size: Option<u64>) -> Self {
        self.keys
            .insert(key.to_string(), (value.to_string(), ttl, size));
        self
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.down {
            return Err(DomainError::StoreUnavailable(
                "Connection refused (os error 111)".to_string(),
            ));
        }
        Ok(())
    }
}

fn glob_match(pattern: &str, text: &str) -> bool {
    match pattern.split_once('*') {
        None => pattern == text,
        Some((head, tail)) => {
            let Some(rest) = text.strip_prefix(head) else {
                return false;
            };
            if tail.is_empty() {
                return true;
            }
            (0..=rest.len())
                .filter(|i| rest.is_char_boundary(*i))
                .any(|i| glob_match(tail, &rest[i..]))
        }
    }
}

#[async_trait]
impl KeyValueStore for StubStore {
    async fn ping(&self) -> Result<(), DomainError> {
        self.check()
    }

    async fn info(&self, section: Option<&str>) -> Result<String, DomainError> {
        self.check()?;
        Ok(match section {
            Some("Memory") => "# Memory\r\nused_memory:4096\r\n".to_string(),
            Some(_) => String::new(),
            None => INFO.to_string(),
        })
    }

    async fn dbsize(&self) -> Result<u64, DomainError> {
        self.check()?;
        Ok(self.keys.len() as u64)
    }

    async fn scan(
        &self,
        _cursor: u64,
        pattern: &str,
        _count_hint: usize,
    ) -> Result<ScanBatch, DomainError> {
        self.check()?;
        Ok(ScanBatch {
            cursor: 0,
            keys: self
                .keys
                .keys()
                .filter(|k| glob_match(pattern, k))
                .cloned()
                .collect(),
        })
    }

    async fn ttl(&self, key: &str) -> Result<i64, DomainError> {
        self.check()?;
        Ok(self.keys.get(key).map(|e| e.1).unwrap_or(-2))
    }

    async fn key_type(&self, key: &str) -> Result<String, DomainError> {
        self.check()?;
        Ok(if self.keys.contains_key(key) { "string" } else { "none" }.to_string())
    }

    async fn memory_usage(&self, key: &str) -> Result<Option<u64>, DomainError> {
        self.check()?;
        Ok(self.keys.get(key).and_then(|e| e.2))
    }

    async fn get_string(&self, key: &str) -> Result<Option<String>, DomainError> {
        self.check()?;
        Ok(self.keys.get(key).map(|e| e.0.clone()))
    }

    async fn hash_entries(
        &self,
        _key: &str,
        _limit: usize,
    ) -> Result<BTreeMap<String, String>, DomainError> {
        Ok(BTreeMap::new())
    }

    async fn list_range(&self, _key: &str, _limit: usize) -> Result<Vec<String>, DomainError> {
        Ok(Vec::new())
    }

    async fn set_members(&self, _key: &str, _limit: usize) -> Result<Vec<String>, DomainError> {
        Ok(Vec::new())
    }

    async fn sorted_set_range(
        &self,
        _key: &str,
        _limit: usize,
    ) -> Result<Vec<ScoredMember>, DomainError> {
        Ok(Vec::new())
    }

    async fn slowlog_get(&self, count: usize) -> Result<Vec<SlowLogEntry>, DomainError> {
        self.check()?;
        Ok((0..count.min(2) as i64)
            .map(|id| SlowLogEntry {
                id,
                timestamp: 1_700_000_000,
                duration_micros: 12_000,
                command: vec!["KEYS".to_string(), "*".to_string()],
                client_addr: None,
                client_name: None,
            })
            .collect())
    }

    async fn latency_latest(&self) -> Result<Vec<LatencyEvent>, DomainError> {
        self.check()?;
        Ok(vec![LatencyEvent {
            event: "command".to_string(),
            timestamp: 1_700_000_000,
            latest_ms: 3,
            max_ms: 20,
        }])
    }
}

pub fn create_test_app(store: StubStore) -> Router {
    create_test_app_with(store, DrupalConfig {
        prefix: "p".to_string(),
        ..DrupalConfig::default()
    })
}

pub fn create_test_app_with(store: StubStore, drupal: DrupalConfig) -> Router {
    let store: Arc<dyn KeyValueStore> = Arc::new(store);
    let summary = Arc::new(GetServerSummaryUseCase::new(store.clone()));

    let state = AppState {
        drupal: DrupalUseCases {
            get_report: Arc::new(GetCacheReportUseCase::new(store.clone())),
            search_by_cid: Arc::new(SearchByCidUseCase::new(store.clone())),
            settings: Arc::new(drupal),
        },
        keys: KeyUseCases {
            inspect: Arc::new(InspectKeyUseCase::new(store.clone(), 100)),
            memory: Arc::new(GetKeyMemoryUseCase::new(store.clone())),
        },
        server: ServerUseCases {
            health: Arc::new(CheckHealthUseCase::new(store.clone())),
            summary: summary.clone(),
            latest_sample: Arc::new(GetLatestSampleUseCase::new(LatestSample::new(), summary)),
            info_section: Arc::new(GetInfoSectionUseCase::new(store.clone())),
            slow_log: Arc::new(GetSlowLogUseCase::new(store.clone())),
            latency: Arc::new(GetLatencyEventsUseCase::new(store)),
        },
    };

    create_api_routes(state)
}
