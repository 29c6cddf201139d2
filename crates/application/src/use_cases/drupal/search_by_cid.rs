use crate::ports::KeyValueStore;
use crate::services::{best_effort, NamespaceScanner, ScanBudget};
use keyscope_domain::{
    build_search_pattern, CidFilter, CidSearchReport, DomainError, SearchHit, Ttl,
};
use std::sync::Arc;
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CidSearchRequest {
    pub prefix: String,
    pub cid: String,
    pub bin: Option<String>,
    /// Maximum candidate keys pulled from the store
    pub limit: usize,
    pub max_round_trips: usize,
    pub count_hint: usize,
}

pub struct SearchByCidUseCase {
    store: Arc<dyn KeyValueStore>,
    scanner: NamespaceScanner,
}

impl SearchByCidUseCase {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            scanner: NamespaceScanner::new(store.clone()),
            store,
        }
    }

    #[instrument(skip(self), name = "drupal_search_by_cid")]
    pub async fn execute(&self, request: &CidSearchRequest) -> Result<CidSearchReport, DomainError> {
        if request.cid.is_empty() {
            return Err(DomainError::InvalidInput("cid is required".to_string()));
        }

        self.store.ping().await?;

        let bin = request.bin.as_deref();
        let pattern = build_search_pattern(&request.prefix, bin, &request.cid);
        let budget = ScanBudget::keys(request.count_hint, request.limit)
            .with_max_round_trips(request.max_round_trips);
        let scan = self.scanner.scan(&pattern, budget).await;

        let filter = CidFilter::new(&request.prefix, &request.cid, bin);
        let mut hits = Vec::new();
        for key in &scan.keys {
            let Some(parts) = filter.accept(key) else {
                continue;
            };

            let ttl = best_effort("ttl", key, self.store.ttl(key).await).map(Ttl::from_reply);
            let key_type = best_effort("type", key, self.store.key_type(key).await);
            let size = best_effort("memory", key, self.store.memory_usage(key).await).flatten();

            hits.push(SearchHit {
                key: key.clone(),
                bin: parts.bin.to_string(),
                cid: parts.cid.to_string(),
                ttl,
                key_type,
                size,
            });
        }

        debug!(
            candidates = scan.keys.len(),
            matches = hits.len(),
            pattern = %pattern,
            "CID search finished"
        );

        Ok(CidSearchReport {
            cid: request.cid.clone(),
            bin: request.bin.clone(),
            pattern,
            hits,
        })
    }
}
