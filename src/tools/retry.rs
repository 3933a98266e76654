use super::config::{RetryConfig, WaitPolicy};
use super::error::{RetryExhaustedError, RunError};
use crate::kind::{Classify, Kind};
use crate::time::{Sleeper, ThreadSleep};

use std::time::Duration;
use tracing::{debug, trace, warn};

/// Creates an executor that retries `operation` with the default settings.
///
/// Shorthand for [`RetryExecutor::new`].
///
/// # Examples
///
/// ```rust
/// use retries::tools::retry;
/// use retries::Failure;
/// use std::time::Duration;
///
/// let mut calls = 0;
/// let result = retry(|| {
///     calls += 1;
///     if calls < 3 {
///         Err(Failure::runtime("not yet"))
///     } else {
///         Ok(calls)
///     }
/// })
/// .set_wait_duration(Duration::ZERO)
/// .run();
///
/// assert_eq!(result.unwrap(), 3);
/// ```
pub fn retry<F, T, E>(operation: F) -> RetryExecutor<F, E::Kind>
where
    F: FnMut() -> Result<T, E>,
    E: Classify,
{
    RetryExecutor::new(operation)
}

/// Runs a fallible operation until it succeeds or the attempt budget runs out.
///
/// Each call to [`run`](Self::run) goes through the following states:
///
/// - **Attempting**: the operation is invoked.
/// - **Succeeded**: the operation returned `Ok`, which `run` returns.
/// - **Failed non-retryable**: the failure's kind is not a sub-kind of the
///   retryable kind. It is returned unchanged as [`RunError::NonRetryable`],
///   without being recorded or waited on.
/// - **Waiting**: the failure was retryable and attempts remain. The
///   executor blocks for the wait duration, then attempts again.
/// - **Exhausted**: the failure was retryable and no attempts remain. Every
///   recorded failure is returned in a [`RetryExhaustedError`].
///
/// The attempt counter and the recorded failures belong to a single `run`
/// call, so an executor can be run any number of times.
///
/// Panics raised by the operation are not caught.
pub struct RetryExecutor<F, K, S = ThreadSleep> {
    operation: F,

    max_attempts: u32,
    wait: Duration,
    wait_policy: WaitPolicy,
    retryable: K,

    sleeper: S,
}

impl<F, K: Kind> RetryExecutor<F, K, ThreadSleep> {
    /// Creates an executor with the default configuration.
    ///
    /// Defaults: 3 attempts, a 1 second wait, [`WaitPolicy::BetweenAttempts`],
    /// and [`K::DEFAULT_RETRYABLE`](Kind::DEFAULT_RETRYABLE) as the retryable kind.
    pub fn new<T, E>(operation: F) -> Self
    where
        F: FnMut() -> Result<T, E>,
        E: Classify<Kind = K>,
    {
        Self {
            operation,
            max_attempts: RetryConfig::DEFAULT_MAX_ATTEMPTS,
            wait: RetryConfig::DEFAULT_WAIT,
            wait_policy: WaitPolicy::default(),
            retryable: K::DEFAULT_RETRYABLE,
            sleeper: ThreadSleep,
        }
    }
}

impl<F, K, S> RetryExecutor<F, K, S>
where
    K: Kind,
    S: Sleeper,
{
    /// Sets the total number of attempts, the first one included.
    ///
    /// The value is not validated. The operation always runs at least once,
    /// so `0` behaves like `1`.
    pub fn set_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Sets the delay between a failed attempt and the next one.
    pub fn set_wait_duration(mut self, wait: Duration) -> Self {
        self.wait = wait;
        self
    }

    /// Sets the kind of failure that is retried.
    ///
    /// Failures of this kind or of any of its sub-kinds are retried. Any other
    /// failure is returned on its first occurrence.
    pub fn set_retryable_kind(mut self, kind: K) -> Self {
        self.retryable = kind;
        self
    }

    /// Sets whether the executor also waits after the final failure.
    pub fn set_wait_policy(mut self, policy: WaitPolicy) -> Self {
        self.wait_policy = policy;
        self
    }

    /// Replaces the sleeper used to wait between attempts.
    pub fn set_sleeper<S2: Sleeper>(self, sleeper: S2) -> RetryExecutor<F, K, S2> {
        RetryExecutor {
            operation: self.operation,
            max_attempts: self.max_attempts,
            wait: self.wait,
            wait_policy: self.wait_policy,
            retryable: self.retryable,
            sleeper,
        }
    }

    /// Applies every setting of `config` at once.
    pub fn with_config(self, config: RetryConfig) -> Self {
        self.set_max_attempts(config.max_attempts)
            .set_wait_duration(config.wait)
            .set_wait_policy(config.wait_policy)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn wait_duration(&self) -> Duration {
        self.wait
    }

    pub fn retryable_kind(&self) -> K {
        self.retryable
    }

    pub fn wait_policy(&self) -> WaitPolicy {
        self.wait_policy
    }

    /// Runs the operation until it succeeds, fails with a non-retryable
    /// failure, or uses up every attempt.
    ///
    /// Blocks the calling thread for the whole run, waits included.
    ///
    /// # Errors
    ///
    /// - [`RunError::NonRetryable`] with the original failure if its kind is
    ///   not a sub-kind of the retryable kind.
    /// - [`RunError::Exhausted`] with every recorded failure, oldest first, if
    ///   all attempts failed with retryable failures.
    pub fn run<T, E>(&mut self) -> Result<T, RunError<E>>
    where
        F: FnMut() -> Result<T, E>,
        E: Classify<Kind = K>,
    {
        let mut attempt: u32 = 0;
        let mut suppressed = Vec::new();

        loop {
            attempt += 1;
            trace!(attempt, max_attempts = self.max_attempts, "attempting operation");

            let failure = match (self.operation)() {
                Ok(value) => return Ok(value),
                Err(failure) => failure,
            };

            let kind = failure.kind();
            if !kind.is_a(self.retryable) {
                debug!(attempt, ?kind, retryable = ?self.retryable, "non-retryable failure");
                return Err(RunError::NonRetryable(failure));
            }

            suppressed.push(failure);

            if attempt < self.max_attempts {
                debug!(attempt, ?kind, wait = ?self.wait, "retryable failure, retrying");
                self.sleeper.sleep(self.wait);
                continue;
            }

            if self.wait_policy == WaitPolicy::AfterEveryFailure {
                self.sleeper.sleep(self.wait);
            }

            warn!(attempts = attempt, ?kind, "retry attempts exhausted");
            return Err(RunError::Exhausted(RetryExhaustedError::new(suppressed)));
        }
    }
}
