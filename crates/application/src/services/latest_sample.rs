use keyscope_domain::InfoSample;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Holds only the most recent info sample; older samples are dropped.
#[derive(Clone, Default)]
pub struct LatestSample {
    inner: Arc<RwLock<Option<InfoSample>>>,
}

impl LatestSample {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn replace(&self, sample: InfoSample) {
        *self.inner.write().await = Some(sample);
    }

    pub async fn get(&self) -> Option<InfoSample> {
        self.inner.read().await.clone()
    }
}
