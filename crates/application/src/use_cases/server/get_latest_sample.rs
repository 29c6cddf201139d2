use super::GetServerSummaryUseCase;
use crate::services::LatestSample;
use keyscope_domain::{DomainError, InfoSample};
use std::sync::Arc;

/// Serves the sample kept by the background sampler, taking one live when
/// nothing has been collected yet.
pub struct GetLatestSampleUseCase {
    latest: LatestSample,
    summary: Arc<GetServerSummaryUseCase>,
}

impl GetLatestSampleUseCase {
    pub fn new(latest: LatestSample, summary: Arc<GetServerSummaryUseCase>) -> Self {
        Self { latest, summary }
    }

    pub async fn execute(&self) -> Result<InfoSample, DomainError> {
        if let Some(sample) = self.latest.get().await {
            return Ok(sample);
        }

        let sample = self.summary.execute().await?;
        self.latest.replace(sample.clone()).await;
        Ok(sample)
    }
}
