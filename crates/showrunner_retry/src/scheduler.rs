//! Retry loop built on `tokio-retry2`.

use crate::{RetryConfig, RetryStep};
use showrunner_error::ShowrunnerResult;
use std::future::Future;
use std::time::Duration;
use tokio_retry2::{Retry, RetryError, strategy::FixedInterval};
use tracing::{debug, instrument, warn};

/// Runs loop steps until they succeed, waiting a per-step delay in between.
///
/// # Example
///
/// ```rust,ignore
/// let scheduler = RetryScheduler::new(RetryConfig::default());
/// let handle = scheduler.run(RetryStep::Fetch, || source.next()).await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct RetryScheduler {
    config: RetryConfig,
}

impl RetryScheduler {
    /// Creates a scheduler with the given delays.
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    /// The configured delays.
    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Run `op` until it succeeds, waiting the step's delay after each failure.
    ///
    /// # Errors
    ///
    /// Returns the first error that is not retryable (see [`with_retry`]).
    pub async fn run<T, F, Fut>(&self, step: RetryStep, op: F) -> ShowrunnerResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ShowrunnerResult<T>>,
    {
        with_retry(&step.to_string(), self.config.delay_for(step), op).await
    }
}

/// Run `op` until it succeeds, waiting `delay` after each failure.
///
/// There is no retry limit. Each attempt builds a fresh future, so whatever
/// the attempt acquired (requests, file handles) is dropped before waiting.
/// A missing episode is logged at debug level, anything else at warn.
///
/// # Errors
///
/// An unusable episode is not worth retrying; that error is returned at once.
#[instrument(skip(op), fields(delay_ms = delay.as_millis() as u64))]
pub async fn with_retry<T, F, Fut>(step: &str, delay: Duration, mut op: F) -> ShowrunnerResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ShowrunnerResult<T>>,
{
    let mut attempt: u64 = 0;

    let result = Retry::spawn(FixedInterval::new(delay), || {
        attempt += 1;
        let current = attempt;
        let fut = op();
        async move {
            fut.await.map_err(|err| {
                if !err.is_retryable() {
                    debug!(attempt = current, error = %err, "Step failed permanently");
                    return RetryError::Permanent(err);
                }

                if err.is_not_available() {
                    debug!(attempt = current, "Nothing available yet, will retry");
                } else {
                    warn!(attempt = current, error = %err, "Step failed, will retry");
                }
                RetryError::Transient {
                    err,
                    retry_after: None,
                }
            })
        }
    })
    .await;

    if result.is_ok() && attempt > 1 {
        debug!(attempts = attempt, "Step succeeded after retrying");
    }
    result
}
