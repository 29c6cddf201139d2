use crate::ports::KeyValueStore;
use keyscope_domain::introspection::SLOWLOG_MAX_COUNT;
use keyscope_domain::{DomainError, SlowLogEntry};
use std::sync::Arc;

pub struct GetSlowLogUseCase {
    store: Arc<dyn KeyValueStore>,
}

impl GetSlowLogUseCase {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, count: usize) -> Result<Vec<SlowLogEntry>, DomainError> {
        let count = count.clamp(1, SLOWLOG_MAX_COUNT);
        self.store.slowlog_get(count).await
    }
}
