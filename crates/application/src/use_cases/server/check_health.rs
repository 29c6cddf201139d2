use crate::ports::KeyValueStore;
use std::sync::Arc;
use tracing::warn;

pub struct CheckHealthUseCase {
    store: Arc<dyn KeyValueStore>,
}

impl CheckHealthUseCase {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// True when the store answers PING.
    pub async fn execute(&self) -> bool {
        match self.store.ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Store health check failed");
                false
            }
        }
    }
}
