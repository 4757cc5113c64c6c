use std::time;

use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::fetch::{FetchClient, FetchResult};

/// Background task calling the processor on a fixed period.
///
/// A failed iteration is logged and the loop carries on. The only way out is the
/// shutdown token, which is checked while waiting for startup, while fetching and
/// while sleeping between iterations.
pub struct Poller {
    fetcher: FetchClient,
    /// Delay before the first fetch.
    startup_delay: time::Duration,
    /// Sleep between the end of one fetch and the start of the next.
    poll_interval: time::Duration,
}

impl Poller {
    pub fn new(
        fetcher: FetchClient,
        startup_delay: time::Duration,
        poll_interval: time::Duration,
    ) -> Self {
        Self {
            fetcher,
            startup_delay,
            poll_interval,
        }
    }

    /// Fetch once and log the outcome.
    pub async fn poll_once(&self) -> FetchResult {
        let result = self.fetcher.fetch().await;

        match &result {
            FetchResult::Success {
                original,
                processed,
            } => {
                metrics::counter!("consumer_poll_total", "outcome" => "success").increment(1);
                info!("[CONSUME] Original: {}, Processed: {}", original, processed);
            }
            FetchResult::Failure { reason } => {
                metrics::counter!("consumer_poll_total", "outcome" => "failure").increment(1);
                error!("[ERROR] Consumption error: {}", reason);
            }
        }

        result
    }

    /// Poll until `shutdown` is cancelled. Returns the number of completed iterations.
    pub async fn run(self, shutdown: CancellationToken) -> u64 {
        let mut iterations = 0;

        tokio::select! {
            _ = shutdown.cancelled() => return iterations,
            _ = tokio::time::sleep(self.startup_delay) => {},
        }

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = self.poll_once() => iterations += 1,
            }

            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = tokio::time::sleep(self.poll_interval) => {},
            }
        }

        info!("poller stopped after {} iterations", iterations);
        iterations
    }
}
