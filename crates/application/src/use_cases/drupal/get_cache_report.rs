use crate::ports::KeyValueStore;
use crate::services::{best_effort, NamespaceScanner, ScanBudget};
use keyscope_domain::{decode, CacheReport, CacheReportBuilder, DomainError, Ttl};
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheReportRequest {
    pub prefix: String,
    pub scan_cap: usize,
    pub scan_count: usize,
    pub top_limit: usize,
}

/// Walks every key under `{prefix}:*` (up to the cap) and folds them into a
/// [`CacheReport`]. Keys are enriched one at a time to keep load on the store
/// flat.
pub struct GetCacheReportUseCase {
    store: Arc<dyn KeyValueStore>,
    scanner: NamespaceScanner,
}

impl GetCacheReportUseCase {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            scanner: NamespaceScanner::new(store.clone()),
            store,
        }
    }

    #[instrument(skip(self), name = "drupal_cache_report")]
    pub async fn execute(&self, request: &CacheReportRequest) -> Result<CacheReport, DomainError> {
        self.store.ping().await?;

        let pattern = format!("{}:*", request.prefix);
        let budget = ScanBudget::keys(request.scan_count, request.scan_cap);
        let scan = self.scanner.scan(&pattern, budget).await;

        let mut builder = CacheReportBuilder::new();
        for key in &scan.keys {
            let ttl = best_effort("ttl", key, self.store.ttl(key).await).map(Ttl::from_reply);
            let bytes = best_effort("memory", key, self.store.memory_usage(key).await).flatten();
            let row = decode(key).with_ttl(ttl).with_bytes(bytes);
            builder.fold(&row);
        }

        debug!(scanned = builder.scanned(), complete = scan.complete, "Cache keys folded");

        let report = builder.finish(&request.prefix, request.top_limit, request.scan_cap);
        info!(
            prefix = %report.prefix,
            scanned = report.scanned,
            bins = report.bins.len(),
            routes = report.top_routes.len(),
            "Drupal cache report built"
        );
        Ok(report)
    }
}
