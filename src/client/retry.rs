//! Retry policy configuration.

use std::fmt;
use std::sync::Arc;

use crate::error::NetworkError;

/// Retry predicate evaluated against the most recent attempt's failure.
pub type ShouldRetry = Arc<dyn Fn(&NetworkError) -> bool + Send + Sync>;

/// Configuration for the retry loop.
///
/// Controls the total attempt budget and which failures warrant another
/// try. The manager holds one of these as its mutable default; either
/// field can be overridden for a single call via
/// [`LoadOverrides`](super::LoadOverrides).
///
/// # Example
///
/// ```
/// use netcall::client::RetryPolicy;
/// use netcall::error::NetworkError;
///
/// // Defaults: one attempt, general retry classification.
/// let policy = RetryPolicy::new();
///
/// // Or customize via builder
/// let custom = RetryPolicy::new()
///     .with_attempt_limit(3)
///     .with_should_retry(|error| matches!(error, NetworkError::Timeout { .. }));
/// ```
#[derive(Clone)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    ///
    /// Values below 1 behave as 1: at least one attempt always runs.
    pub attempt_limit: u32,

    /// Decides, from the last attempt's error, whether to try again.
    ///
    /// Consulted only on failure; a success always stops the loop.
    pub should_retry: ShouldRetry,
}

impl RetryPolicy {
    /// Default attempt budget: a single attempt, no retries.
    pub const DEFAULT_ATTEMPT_LIMIT: u32 = 1;

    /// Creates a policy with the default attempt limit and
    /// [`general_should_retry`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            attempt_limit: Self::DEFAULT_ATTEMPT_LIMIT,
            should_retry: Arc::new(general_should_retry),
        }
    }

    /// Sets the total attempt budget.
    ///
    /// Values below 1 are accepted and clamped at execution time.
    #[must_use]
    pub const fn with_attempt_limit(mut self, attempt_limit: u32) -> Self {
        self.attempt_limit = attempt_limit;
        self
    }

    /// Sets the retry predicate.
    #[must_use]
    pub fn with_should_retry(
        mut self,
        should_retry: impl Fn(&NetworkError) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.should_retry = Arc::new(should_retry);
        self
    }

    /// The attempt budget with the minimum-one clamp applied.
    #[must_use]
    pub const fn effective_attempt_limit(&self) -> u32 {
        if self.attempt_limit < 1 {
            1
        } else {
            self.attempt_limit
        }
    }

    /// Evaluates the retry predicate against the last attempt's failure.
    #[must_use]
    pub fn retries(&self, error: &NetworkError) -> bool {
        (*self.should_retry)(error)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RetryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryPolicy")
            .field("attempt_limit", &self.attempt_limit)
            .field("should_retry", &"<predicate>")
            .finish()
    }
}

/// The general retry classification.
///
/// Retries transient failures: timeouts, transport-level errors, and 5xx
/// server responses. Everything else (invalid URLs, missing connectivity,
/// encode/decode failures, 401/403, and other 4xx responses) is final.
#[must_use]
pub fn general_should_retry(error: &NetworkError) -> bool {
    matches!(
        error,
        NetworkError::Timeout { .. } | NetworkError::Transport { .. } | NetworkError::Server { .. }
    )
}
