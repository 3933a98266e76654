use std::time::Duration;

/// Decides whether the executor waits after the final failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WaitPolicy {
    /// Wait only when another attempt follows.
    #[default]
    BetweenAttempts,

    /// Wait after every retryable failure, including the one that exhausts
    /// the attempt budget.
    AfterEveryFailure,
}

/// Retry settings that can be applied to an executor in one call.
///
/// # Examples
///
/// ```rust
/// use retries::tools::{retry, RetryConfig};
/// use retries::Failure;
/// use std::time::Duration;
///
/// let config = RetryConfig {
///     max_attempts: 5,
///     wait: Duration::from_millis(10),
///     ..RetryConfig::default()
/// };
///
/// let executor = retry(|| Ok::<_, Failure>(1)).with_config(config);
/// assert_eq!(executor.max_attempts(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RetryConfig {
    /// Total number of attempts, the first one included.
    pub max_attempts: u32,
    /// Delay inserted after a retryable failure.
    pub wait: Duration,
    pub wait_policy: WaitPolicy,
}

impl RetryConfig {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    pub const DEFAULT_WAIT: Duration = Duration::from_secs(1);
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            wait: Self::DEFAULT_WAIT,
            wait_policy: WaitPolicy::default(),
        }
    }
}
