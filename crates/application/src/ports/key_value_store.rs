use async_trait::async_trait;
use keyscope_domain::{DomainError, LatencyEvent, ScoredMember, SlowLogEntry};
use std::collections::BTreeMap;

/// Cursor value that both starts and ends a SCAN iteration.
pub const SCAN_START: u64 = 0;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanBatch {
    pub cursor: u64,
    pub keys: Vec<String>,
}

/// Capabilities Keyscope needs from the monitored key-value store.
///
/// Implementations report an unreachable store as
/// [`DomainError::StoreUnavailable`] and a rejected or failed command as
/// [`DomainError::StoreCommand`].
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn ping(&self) -> Result<(), DomainError>;

    /// Raw `INFO` text, optionally limited to one section.
    async fn info(&self, section: Option<&str>) -> Result<String, DomainError>;

    async fn dbsize(&self) -> Result<u64, DomainError>;

    async fn scan(
        &self,
        cursor: u64,
        pattern: &str,
        count_hint: usize,
    ) -> Result<ScanBatch, DomainError>;

    /// Raw TTL reply: `-1` persists, `-2` missing.
    async fn ttl(&self, key: &str) -> Result<i64, DomainError>;

    async fn key_type(&self, key: &str) -> Result<String, DomainError>;

    /// `None` when the store has no accounting for the key.
    async fn memory_usage(&self, key: &str) -> Result<Option<u64>, DomainError>;

    async fn get_string(&self, key: &str) -> Result<Option<String>, DomainError>;

    async fn hash_entries(
        &self,
        key: &str,
        limit: usize,
    ) -> Result<BTreeMap<String, String>, DomainError>;

    async fn list_range(&self, key: &str, limit: usize) -> Result<Vec<String>, DomainError>;

    async fn set_members(&self, key: &str, limit: usize) -> Result<Vec<String>, DomainError>;

    async fn sorted_set_range(
        &self,
        key: &str,
        limit: usize,
    ) -> Result<Vec<ScoredMember>, DomainError>;

    async fn slowlog_get(&self, count: usize) -> Result<Vec<SlowLogEntry>, DomainError>;

    async fn latency_latest(&self) -> Result<Vec<LatencyEvent>, DomainError>;
}
