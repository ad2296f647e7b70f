//! Retry policy for outbound requests
//!
//! Transient failures are retried with exponential backoff; the policy
//! here only shapes the backoff schedule. Which failures count as
//! transient is decided at the call site.

use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use std::time::Duration;

/// Backoff schedule for retrying transient failures
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Delay before the first retry
    pub initial_interval: Duration,
    /// Upper bound on the delay between retries
    pub max_interval: Duration,
    /// Multiplier applied to the delay after each retry
    pub multiplier: f64,
    /// Total time budget after which the request fails for good
    pub max_elapsed: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            initial_interval: Duration::from_millis(500),
            max_interval: Duration::from_secs(5),
            multiplier: 2.0,
            max_elapsed: Duration::from_secs(15),
        }
    }
}

impl RetryPolicy {
    /// Build the exponential backoff schedule for one request
    pub fn backoff(&self) -> ExponentialBackoff {
        ExponentialBackoffBuilder::new()
            .with_initial_interval(self.initial_interval)
            .with_max_interval(self.max_interval)
            .with_multiplier(self.multiplier)
            .with_max_elapsed_time(Some(self.max_elapsed))
            .build()
    }

    /// Policy that gives up after the first failure
    pub fn no_retry() -> Self {
        Self {
            max_elapsed: Duration::ZERO,
            ..Self::default()
        }
    }
}
