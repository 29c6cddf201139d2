use keyscope_application::services::LatestSample;
use keyscope_application::use_cases::GetServerSummaryUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

const DEFAULT_INTERVAL_SECS: u64 = 5;

/// Periodically takes an INFO + DBSIZE sample and replaces the previous one.
pub struct InfoSamplerJob {
    summary: Arc<GetServerSummaryUseCase>,
    latest: LatestSample,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl InfoSamplerJob {
    pub fn new(summary: Arc<GetServerSummaryUseCase>, latest: LatestSample) -> Self {
        Self {
            summary,
            latest,
            interval_secs: DEFAULT_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval_secs, "Starting info sampler job");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("InfoSamplerJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.summary.execute().await {
                            Ok(sample) => {
                                debug!(dbsize = sample.dbsize, "Info sample taken");
                                self.latest.replace(sample).await;
                            }
                            Err(e) => {
                                warn!(error = %e, "Info sample failed");
                            }
                        }
                    }
                }
            }
        });
    }
}
