use async_trait::async_trait;
use keyscope_application::ports::{KeyValueStore, ScanBatch};
use keyscope_domain::{DomainError, LatencyEvent, ScoredMember, SlowLogEntry};
use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone)]
pub enum FakeValue {
    String(String),
    Hash(Vec<(String, String)>),
    List(Vec<String>),
    Set(Vec<String>),
    ZSet(Vec<(String, f64)>),
    Stream,
}

impl FakeValue {
    fn type_name(&self) -> &'static str {
        match self {
            FakeValue::String(_) => "string",
            FakeValue::Hash(_) => "hash",
            FakeValue::List(_) => "list",
            FakeValue::Set(_) => "set",
            FakeValue::ZSet(_) => "zset",
            FakeValue::Stream => "stream",
        }
    }
}

#[derive(Debug, Clone)]
struct FakeEntry {
    value: FakeValue,
    ttl: i64,
    size: Option<u64>,
}

#[derive(Default)]
struct Failures {
    ping: bool,
    scan_from_call: Option<usize>,
    ttl: HashSet<String>,
    key_type: HashSet<String>,
    memory: HashSet<String>,
    info: bool,
}

/// In-memory store. SCAN walks keys in sorted order, `page_size` keys per
/// call, and applies the MATCH glob (`*` only) to each page like Redis does.
#[derive(Clone)]
pub struct FakeStore {
    entries: Arc<RwLock<BTreeMap<String, FakeEntry>>>,
    failures: Arc<RwLock<Failures>>,
    page_size: Arc<RwLock<Option<usize>>>,
    info_text: Arc<RwLock<String>>,
    slowlog: Arc<RwLock<Vec<SlowLogEntry>>>,
    latency: Arc<RwLock<Vec<LatencyEvent>>>,
    ping_calls: Arc<AtomicUsize>,
    scan_calls: Arc<AtomicUsize>,
    info_calls: Arc<AtomicUsize>,
    last_slowlog_count: Arc<AtomicUsize>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(BTreeMap::new())),
            failures: Arc::new(RwLock::new(Failures::default())),
            page_size: Arc::new(RwLock::new(None)),
            info_text: Arc::new(RwLock::new(String::new())),
            slowlog: Arc::new(RwLock::new(Vec::new())),
            latency: Arc::new(RwLock::new(Vec::new())),
            ping_calls: Arc::new(AtomicUsize::new(0)),
            scan_calls: Arc::new(AtomicUsize::new(0)),
            info_calls: Arc::new(AtomicUsize::new(0)),
            last_slowlog_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_keys(keys: &[(&str, i64, Option<u64>)]) -> Self {
        let store = Self::new();
        for (key, ttl, size) in keys {
            store.insert(key, FakeValue::String("x".to_string()), *ttl, *size);
        }
        store
    }

    pub fn insert(&self, key: &str, value: FakeValue, ttl: i64, size: Option<u64>) {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), FakeEntry { value, ttl, size });
    }

    pub fn set_page_size(&self, size: usize) {
        *self.page_size.write().unwrap() = Some(size);
    }

    pub fn set_info(&self, text: &str) {
        *self.info_text.write().unwrap() = text.to_string();
    }

    pub fn set_slowlog(&self, entries: Vec<SlowLogEntry>) {
        *self.slowlog.write().unwrap() = entries;
    }

    pub fn set_latency(&self, events: Vec<LatencyEvent>) {
        *self.latency.write().unwrap() = events;
    }

    pub fn fail_ping(&self) {
        self.failures.write().unwrap().ping = true;
    }

    pub fn fail_info(&self) {
        self.failures.write().unwrap().info = true;
    }

    /// Every SCAN from the `n`th call (1-based) on fails.
    pub fn fail_scan_from_call(&self, n: usize) {
        self.failures.write().unwrap().scan_from_call = Some(n);
    }

    pub fn fail_ttl_for(&self, key: &str) {
        self.failures.write().unwrap().ttl.insert(key.to_string());
    }

    pub fn fail_type_for(&self, key: &str) {
        self.failures.write().unwrap().key_type.insert(key.to_string());
    }

    pub fn fail_memory_for(&self, key: &str) {
        self.failures.write().unwrap().memory.insert(key.to_string());
    }

    pub fn ping_calls(&self) -> usize {
        self.ping_calls.load(Ordering::SeqCst)
    }

    pub fn scan_calls(&self) -> usize {
        self.scan_calls.load(Ordering::SeqCst)
    }

    pub fn info_calls(&self) -> usize {
        self.info_calls.load(Ordering::SeqCst)
    }

    pub fn last_slowlog_count(&self) -> usize {
        self.last_slowlog_count.load(Ordering::SeqCst)
    }

    fn entry(&self, key: &str) -> Option<FakeEntry> {
        self.entries.read().unwrap().get(key).cloned()
    }
}

impl Default for FakeStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn glob_match(pattern: &str, text: &str) -> bool {
    let p: Vec<char> = pattern.chars().collect();
    let t: Vec<char> = text.chars().collect();
    let (mut pi, mut ti) = (0, 0);
    let mut star: Option<(usize, usize)> = None;

    while ti < t.len() {
        if pi < p.len() && p[pi] == '*' {
            star = Some((pi, ti));
            pi += 1;
        } else if pi < p.len() && p[pi] == t[ti] {
            pi += 1;
            ti += 1;
        } else if let Some((sp, st)) = star {
            pi = sp + 1;
            ti = st + 1;
            star = Some((sp, st + 1));
        } else {
            return false;
        }
    }
    while pi < p.len() && p[pi] == '*' {
        pi += 1;
    }
    pi == p.len()
}

fn command_failed(name: &str) -> DomainError {
    DomainError::StoreCommand(format!("{}: ERR command not allowed", name))
}

#[async_trait]
impl KeyValueStore for FakeStore {
    async fn ping(&self) -> Result<(), DomainError> {
        self.ping_calls.fetch_add(1, Ordering::SeqCst);
        if self.failures.read().unwrap().ping {
            return Err(DomainError::StoreUnavailable(
                "Connection refused (os error 111)".to_string(),
            ));
        }
        Ok(())
    }

    async fn info(&self, section: Option<&str>) -> Result<String, DomainError> {
        self.info_calls.fetch_add(1, Ordering::SeqCst);
        if self.failures.read().unwrap().info {
            return Err(DomainError::StoreUnavailable("broken pipe".to_string()));
        }
        let text = self.info_text.read().unwrap().clone();
        match section {
            None => Ok(text),
            Some(name) => {
                let marker = format!("# {}", name);
                let mut out = String::new();
                let mut inside = false;
                for line in text.lines() {
                    if line.starts_with('#') {
                        inside = line.trim().eq_ignore_ascii_case(&marker);
                    }
                    if inside {
                        out.push_str(line);
                        out.push_str("\r\n");
                    }
                }
                Ok(out)
            }
        }
    }

    async fn dbsize(&self) -> Result<u64, DomainError> {
        Ok(self.entries.read().unwrap().len() as u64)
    }

    async fn scan(
        &self,
        cursor: u64,
        pattern: &str,
        count_hint: usize,
    ) -> Result<ScanBatch, DomainError> {
        let call = self.scan_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(from) = self.failures.read().unwrap().scan_from_call {
            if call >= from {
                return Err(command_failed("SCAN"));
            }
        }

        let page = self.page_size.read().unwrap().unwrap_or(count_hint).max(1);
        let entries = self.entries.read().unwrap();
        let start = cursor as usize;
        let end = (start + page).min(entries.len());

        let keys = entries
            .keys()
            .skip(start)
            .take(end - start)
            .filter(|k| glob_match(pattern, k))
            .cloned()
            .collect();
        let next = if end >= entries.len() { 0 } else { end as u64 };

        Ok(ScanBatch { cursor: next, keys })
    }

    async fn ttl(&self, key: &str) -> Result<i64, DomainError> {
        if self.failures.read().unwrap().ttl.contains(key) {
            return Err(command_failed("TTL"));
        }
        Ok(self.entry(key).map(|e| e.ttl).unwrap_or(-2))
    }

    async fn key_type(&self, key: &str) -> Result<String, DomainError> {
        if self.failures.read().unwrap().key_type.contains(key) {
            return Err(command_failed("TYPE"));
        }
        Ok(self
            .entry(key)
            .map(|e| e.value.type_name())
            .unwrap_or("none")
            .to_string())
    }

    async fn memory_usage(&self, key: &str) -> Result<Option<u64>, DomainError> {
        if self.failures.read().unwrap().memory.contains(key) {
            return Err(command_failed("MEMORY USAGE"));
        }
        Ok(self.entry(key).and_then(|e| e.size))
    }

    async fn get_string(&self, key: &str) -> Result<Option<String>, DomainError> {
        match self.entry(key).map(|e| e.value) {
            Some(FakeValue::String(s)) => Ok(Some(s)),
            Some(_) => Err(command_failed("GET")),
            None => Ok(None),
        }
    }

    async fn hash_entries(
        &self,
        key: &str,
        limit: usize,
    ) -> Result<BTreeMap<String, String>, DomainError> {
        match self.entry(key).map(|e| e.value) {
            Some(FakeValue::Hash(fields)) => Ok(fields.into_iter().take(limit).collect()),
            _ => Ok(BTreeMap::new()),
        }
    }

    async fn list_range(&self, key: &str, limit: usize) -> Result<Vec<String>, DomainError> {
        match self.entry(key).map(|e| e.value) {
            Some(FakeValue::List(items)) => Ok(items.into_iter().take(limit).collect()),
            _ => Ok(Vec::new()),
        }
    }

    async fn set_members(&self, key: &str, limit: usize) -> Result<Vec<String>, DomainError> {
        match self.entry(key).map(|e| e.value) {
            Some(FakeValue::Set(items)) => Ok(items.into_iter().take(limit).collect()),
            _ => Ok(Vec::new()),
        }
    }

    async fn sorted_set_range(
        &self,
        key: &str,
        limit: usize,
    ) -> Result<Vec<ScoredMember>, DomainError> {
        match self.entry(key).map(|e| e.value) {
            Some(FakeValue::ZSet(items)) => Ok(items
                .into_iter()
                .take(limit)
                .map(|(member, score)| ScoredMember { member, score })
                .collect()),
            _ => Ok(Vec::new()),
        }
    }

    async fn slowlog_get(&self, count: usize) -> Result<Vec<SlowLogEntry>, DomainError> {
        self.last_slowlog_count.store(count, Ordering::SeqCst);
        Ok(self
            .slowlog
            .read()
            .unwrap()
            .iter()
            .take(count)
            .cloned()
            .collect())
    }

    async fn latency_latest(&self) -> Result<Vec<LatencyEvent>, DomainError> {
        Ok(self.latency.read().unwrap().clone())
    }
}
