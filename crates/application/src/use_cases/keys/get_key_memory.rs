use crate::ports::KeyValueStore;
use keyscope_domain::DomainError;
use std::sync::Arc;

pub struct GetKeyMemoryUseCase {
    store: Arc<dyn KeyValueStore>,
}

impl GetKeyMemoryUseCase {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, key: &str) -> Result<Option<u64>, DomainError> {
        if key.is_empty() {
            return Err(DomainError::InvalidInput("key is required".to_string()));
        }
        self.store.memory_usage(key).await
    }
}
