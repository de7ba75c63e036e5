use crate::config::PollerConfig;
use crate::core::{PollSummary, StatusRecord, StatusSink, StatusSource};
use crate::utils::error::{PollerError, Result};
use chrono::Utc;

/// Sequential request / log / sleep loop over `config.iterations()`.
///
/// The first failure ends the run and is returned to the caller; nothing is
/// retried and nothing after the failing iteration is attempted.
pub struct Poller<S: StatusSource, K: StatusSink> {
    config: PollerConfig,
    source: S,
    sink: K,
}

impl<S: StatusSource, K: StatusSink> Poller<S, K> {
    pub fn new(config: PollerConfig, source: S, sink: K) -> Self {
        Self {
            config,
            source,
            sink,
        }
    }

    pub async fn run(&self) -> Result<PollSummary> {
        let started_at = Utc::now();
        let mut completed = 0;

        tracing::debug!(
            "Polling {} for {} iterations every {:?}",
            self.source.endpoint(),
            self.config.iteration_count(),
            self.config.interval
        );

        for iteration in self.config.iterations() {
            let body = self
                .source
                .fetch()
                .await
                .map_err(|e| PollerError::from_fetch(e, iteration, self.source.endpoint()))?;

            let record = StatusRecord::from_bytes(iteration, &body);
            self.sink.emit(&record);
            completed += 1;

            tokio::time::sleep(self.config.interval).await;
        }

        Ok(PollSummary {
            iterations: completed,
            started_at,
            finished_at: Utc::now(),
        })
    }
}
