//! Fixed pre-request delay for the statistics endpoint.
//!
//! Jikan rate-limits aggressively; every statistics request waits the full
//! delay first, whether or not time has passed since the previous one.

use std::time::Duration;
use tokio::time::sleep;

/// Fixed delay applied before each statistics request
#[derive(Debug, Clone, Copy)]
pub struct StatsThrottle {
    delay: Duration,
}

impl StatsThrottle {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait out the delay before a statistics request
    pub async fn acquire(&self) {
        if self.delay.is_zero() {
            return;
        }
        tracing::debug!(
            wait_ms = self.delay.as_millis(),
            "Throttle: waiting before statistics request"
        );
        sleep(self.delay).await;
    }
}
