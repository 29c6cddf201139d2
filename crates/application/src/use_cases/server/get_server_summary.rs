use crate::ports::KeyValueStore;
use chrono::Utc;
use keyscope_domain::{DomainError, InfoSample, ServerInfo};
use std::sync::Arc;
use tracing::instrument;

/// Full `INFO` plus `DBSIZE`, taken live.
pub struct GetServerSummaryUseCase {
    store: Arc<dyn KeyValueStore>,
}

impl GetServerSummaryUseCase {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self), name = "server_summary")]
    pub async fn execute(&self) -> Result<InfoSample, DomainError> {
        let text = self.store.info(None).await?;
        let dbsize = self.store.dbsize().await?;

        Ok(InfoSample {
            captured_at: Utc::now(),
            dbsize,
            info: ServerInfo::parse(&text),
        })
    }
}
