use crate::ports::KeyValueStore;
use keyscope_domain::{DomainError, LatencyEvent};
use std::sync::Arc;

pub struct GetLatencyEventsUseCase {
    store: Arc<dyn KeyValueStore>,
}

impl GetLatencyEventsUseCase {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<Vec<LatencyEvent>, DomainError> {
        let mut events = self.store.latency_latest().await?;
        events.sort_by(|a, b| b.max_ms.cmp(&a.max_ms));
        Ok(events)
    }
}
