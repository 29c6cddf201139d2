#![allow(dead_code)]

use async_trait::async_trait;
use keyscope_application::ports::{KeyValueStore, ScanBatch};
use keyscope_domain::{DomainError, LatencyEvent, ScoredMember, SlowLogEntry};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Answers INFO and DBSIZE only; counts INFO calls.
pub struct MockInfoStore {
    info_calls: AtomicUsize,
    failing: AtomicBool,
}

impl MockInfoStore {
    pub fn new() -> Self {
        Self {
            info_calls: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
        }
    }

    pub fn failing() -> Self {
        let store = Self::new();
        store.failing.store(true, Ordering::SeqCst);
        store
    }

    pub fn info_calls(&self) -> usize {
        self.info_calls.load(Ordering::SeqCst)
    }
}

fn unsupported() -> DomainError {
    DomainError::StoreCommand("not supported by mock".to_string())
}

#[async_trait]
impl KeyValueStore for MockInfoStore {
    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }

    async fn info(&self, _section: Option<&str>) -> Result<String, DomainError> {
        let n = self.info_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::StoreUnavailable("connection reset".to_string()));
        }
        Ok(format!("# Stats\r\ntotal_commands_processed:{}\r\n", n))
    }

    async fn dbsize(&self) -> Result<u64, DomainError> {
        Ok(42)
    }

    async fn scan(&self, _: u64, _: &str, _: usize) -> Result<ScanBatch, DomainError> {
        Err(unsupported())
    }

    async fn ttl(&self, _: &str) -> Result<i64, DomainError> {
        Err(unsupported())
    }

    async fn key_type(&self, _: &str) -> Result<String, DomainError> {
        Err(unsupported())
    }

    async fn memory_usage(&self, _: &str) -> Result<Option<u64>, DomainError> {
        Err(unsupported())
    }

    async fn get_string(&self, _: &str) -> Result<Option<String>, DomainError> {
        Err(unsupported())
    }

    async fn hash_entries(&self, _: &str, _: usize) -> Result<BTreeMap<String, String>, DomainError> {
        Err(unsupported())
    }

    async fn list_range(&self, _: &str, _: usize) -> Result<Vec<String>, DomainError> {
        Err(unsupported())
    }

    async fn set_members(&self, _: &str, _: usize) -> Result<Vec<String>, DomainError> {
        Err(unsupported())
    }

    async fn sorted_set_range(&self, _: &str, _: usize) -> Result<Vec<ScoredMember>, DomainError> {
        Err(unsupported())
    }

    async fn slowlog_get(&self, _: usize) -> Result<Vec<SlowLogEntry>, DomainError> {
        Err(unsupported())
    }

    async fn latency_latest(&self) -> Result<Vec<LatencyEvent>, DomainError> {
        Err(unsupported())
    }
}
