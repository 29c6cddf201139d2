use super::reply::{latency_event, lossy, scan_keys, scored_members, slowlog_entry};
use async_trait::async_trait;
use keyscope_application::ports::{KeyValueStore, ScanBatch, SCAN_START};
use keyscope_domain::{DomainError, LatencyEvent, ScoredMember, SlowLogEntry};
use redis::aio::MultiplexedConnection;
use redis::{Client, Cmd, FromRedisValue, RedisError, Value};
use std::collections::BTreeMap;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

const COLLECTION_SCAN_COUNT: usize = 100;

/// [`KeyValueStore`] backed by a single multiplexed Redis connection.
///
/// The connection is opened on first use and dropped again on any
/// connectivity error, so the service starts and keeps answering (with
/// `ok: false`) while Redis is down.
pub struct RedisStore {
    client: Client,
    conn: Mutex<Option<MultiplexedConnection>>,
}

impl RedisStore {
    pub fn new(url: &str) -> Result<Self, DomainError> {
        let client = Client::open(url)
            .map_err(|e| DomainError::ConfigError(format!("Invalid store URL: {}", e)))?;
        Ok(Self {
            client,
            conn: Mutex::new(None),
        })
    }

    async fn connection(&self) -> Result<MultiplexedConnection, DomainError> {
        let mut slot = self.conn.lock().await;
        if let Some(conn) = slot.as_ref() {
            return Ok(conn.clone());
        }

        let conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        info!("Connected to store");
        *slot = Some(conn.clone());
        Ok(conn)
    }

    async fn query<T: FromRedisValue>(&self, name: &'static str, cmd: Cmd) -> Result<T, DomainError> {
        let mut conn = self.connection().await?;
        let result: Result<T, RedisError> = cmd.query_async(&mut conn).await;
        match result {
            Ok(value) => Ok(value),
            Err(e) => Err(self.classify(name, e).await),
        }
    }

    async fn classify(&self, name: &'static str, e: RedisError) -> DomainError {
        if e.is_io_error() || e.is_connection_dropped() || e.is_connection_refusal() || e.is_timeout()
        {
            warn!(command = name, error = %e, "Store connection lost");
            *self.conn.lock().await = None;
            DomainError::StoreUnavailable(e.to_string())
        } else {
            debug!(command = name, error = %e, "Store command rejected");
            DomainError::StoreCommand(format!("{}: {}", name, e))
        }
    }

    /// Drives HSCAN/SSCAN until the cursor wraps or `limit` items are seen.
    async fn collection_scan(
        &self,
        name: &'static str,
        key: &str,
        limit: usize,
    ) -> Result<Vec<Vec<u8>>, DomainError> {
        let mut items = Vec::new();
        let mut cursor = SCAN_START;
        loop {
            let mut cmd = redis::cmd(name);
            cmd.arg(key)
                .arg(cursor)
                .arg("COUNT")
                .arg(COLLECTION_SCAN_COUNT);
            let (next, batch): (u64, Vec<Vec<u8>>) = self.query(name, cmd).await?;
            items.extend(batch);
            cursor = next;
            if cursor == SCAN_START || items.len() >= limit {
                break;
            }
        }
        Ok(items)
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn ping(&self) -> Result<(), DomainError> {
        let _: String = self.query("PING", redis::cmd("PING")).await?;
        Ok(())
    }

    async fn info(&self, section: Option<&str>) -> Result<String, DomainError> {
        let mut cmd = redis::cmd("INFO");
        if let Some(section) = section {
            cmd.arg(section);
        }
        self.query("INFO", cmd).await
    }

    async fn dbsize(&self) -> Result<u64, DomainError> {
        self.query("DBSIZE", redis::cmd("DBSIZE")).await
    }

    async fn scan(
        &self,
        cursor: u64,
        pattern: &str,
        count_hint: usize,
    ) -> Result<ScanBatch, DomainError> {
        let mut cmd = redis::cmd("SCAN");
        cmd.arg(cursor)
            .arg("MATCH")
            .arg(pattern)
            .arg("COUNT")
            .arg(count_hint);
        let (cursor, keys): (u64, Vec<Vec<u8>>) = self.query("SCAN", cmd).await?;
        Ok(ScanBatch {
            cursor,
            keys: scan_keys(keys),
        })
    }

    async fn ttl(&self, key: &str) -> Result<i64, DomainError> {
        let mut cmd = redis::cmd("TTL");
        cmd.arg(key);
        self.query("TTL", cmd).await
    }

    async fn key_type(&self, key: &str) -> Result<String, DomainError> {
        let mut cmd = redis::cmd("TYPE");
        cmd.arg(key);
        self.query("TYPE", cmd).await
    }

    async fn memory_usage(&self, key: &str) -> Result<Option<u64>, DomainError> {
        let mut cmd = redis::cmd("MEMORY");
        cmd.arg("USAGE").arg(key);
        self.query("MEMORY USAGE", cmd).await
    }

    async fn get_string(&self, key: &str) -> Result<Option<String>, DomainError> {
        let mut cmd = redis::cmd("GET");
        cmd.arg(key);
        let value: Option<Vec<u8>> = self.query("GET", cmd).await?;
        Ok(value.map(lossy))
    }

    async fn hash_entries(
        &self,
        key: &str,
        limit: usize,
    ) -> Result<BTreeMap<String, String>, DomainError> {
        let flat = self.collection_scan("HSCAN", key, limit * 2).await?;
        let mut entries = BTreeMap::new();
        let mut iter = flat.into_iter();
        while let (Some(field), Some(value)) = (iter.next(), iter.next()) {
            if entries.len() >= limit {
                break;
            }
            entries.insert(lossy(field), lossy(value));
        }
        Ok(entries)
    }

    async fn list_range(&self, key: &str, limit: usize) -> Result<Vec<String>, DomainError> {
        let mut cmd = redis::cmd("LRANGE");
        cmd.arg(key).arg(0).arg(limit as i64 - 1);
        let items: Vec<Vec<u8>> = self.query("LRANGE", cmd).await?;
        Ok(items.into_iter().map(lossy).collect())
    }

    async fn set_members(&self, key: &str, limit: usize) -> Result<Vec<String>, DomainError> {
        let mut members = self.collection_scan("SSCAN", key, limit).await?;
        members.truncate(limit);
        Ok(members.into_iter().map(lossy).collect())
    }

    async fn sorted_set_range(
        &self,
        key: &str,
        limit: usize,
    ) -> Result<Vec<ScoredMember>, DomainError> {
        let mut cmd = redis::cmd("ZRANGE");
        cmd.arg(key).arg(0).arg(limit as i64 - 1).arg("WITHSCORES");
        let values: Vec<Value> = self.query("ZRANGE", cmd).await?;
        Ok(scored_members(values))
    }

    async fn slowlog_get(&self, count: usize) -> Result<Vec<SlowLogEntry>, DomainError> {
        let mut cmd = redis::cmd("SLOWLOG");
        cmd.arg("GET").arg(count);
        let values: Vec<Value> = self.query("SLOWLOG GET", cmd).await?;
        Ok(values.iter().filter_map(slowlog_entry).collect())
    }

    async fn latency_latest(&self) -> Result<Vec<LatencyEvent>, DomainError> {
        let mut cmd = redis::cmd("LATENCY");
        cmd.arg("LATEST");
        let values: Vec<Value> = self.query("LATENCY LATEST", cmd).await?;
        Ok(values.iter().filter_map(latency_event).collect())
    }
}
