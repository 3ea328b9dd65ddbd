use std::future::Future;
use std::time::Duration;

use employee_core::{AppError, AppResult};
use tracing::warn;

/// Decides whether an attempt error may be retried.
pub type RetryClassifier = fn(&AppError) -> bool;

/// Classifier that retries every error raised inside an attempt.
#[must_use]
pub fn retry_all(_error: &AppError) -> bool {
    true
}

/// Bounded retry with a fixed delay between attempts.
///
/// No jitter and no exponential growth: attempt `n + 1` starts `delay` after
/// attempt `n` failed.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
    classifier: RetryClassifier,
}

/// Why a retried operation gave up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryFailure {
    /// Every attempt failed with a retryable error.
    Exhausted {
        /// Number of attempts made.
        attempts: u32,
        /// Error of the final attempt.
        last_error: AppError,
    },
    /// An attempt failed with an error the classifier refused to retry.
    Aborted(AppError),
}

impl RetryPolicy {
    /// Default attempt budget, including the first call.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

    /// Default pause between attempts.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

    /// Creates a policy that retries every error.
    #[must_use]
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
            classifier: retry_all,
        }
    }

    /// Replaces the retryable-error classifier.
    #[must_use]
    pub fn with_classifier(self, classifier: RetryClassifier) -> Self {
        Self { classifier, ..self }
    }

    /// Returns the attempt budget.
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Returns the pause between attempts.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Runs `attempt` until it succeeds, the classifier refuses an error, or
    /// the budget is spent. The closure receives the 1-based attempt number.
    pub async fn run<T, F, Fut>(&self, operation: &str, mut attempt: F) -> Result<T, RetryFailure>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = AppResult<T>>,
    {
        let mut attempt_number = 0_u32;

        loop {
            attempt_number = attempt_number.saturating_add(1);

            let error = match attempt(attempt_number).await {
                Ok(value) => return Ok(value),
                Err(error) => error,
            };

            if !(self.classifier)(&error) {
                return Err(RetryFailure::Aborted(error));
            }

            if attempt_number >= self.max_attempts {
                return Err(RetryFailure::Exhausted {
                    attempts: attempt_number,
                    last_error: error,
                });
            }

            warn!(
                operation,
                attempt = attempt_number,
                max_attempts = self.max_attempts,
                delay_ms = u64::try_from(self.delay.as_millis()).unwrap_or(u64::MAX),
                error = %error,
                "attempt failed, retrying"
            );
            tokio::time::sleep(self.delay).await;
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS, Self::DEFAULT_DELAY)
    }
}
