/// The terminal failure raised once every attempt has failed.
///
/// It carries the retryable failures suppressed during the run, oldest
/// first, exactly as the operation returned them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("retry attempts exhausted after {} failed attempts", .suppressed.len())]
pub struct RetryExhaustedError<E> {
    suppressed: Vec<E>,
}

impl<E> RetryExhaustedError<E> {
    pub(crate) fn new(suppressed: Vec<E>) -> Self {
        Self { suppressed }
    }

    /// Returns the suppressed failures in attempt order.
    pub fn suppressed(&self) -> &[E] {
        &self.suppressed
    }

    pub fn into_suppressed(self) -> Vec<E> {
        self.suppressed
    }

    /// Returns the failure of the final attempt.
    pub fn last(&self) -> Option<&E> {
        self.suppressed.last()
    }

    pub fn len(&self) -> usize {
        self.suppressed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suppressed.is_empty()
    }
}

/// The error returned by [`RetryExecutor::run`](super::RetryExecutor::run).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunError<E> {
    /// A failure outside the retryable kind, returned unchanged.
    #[error(transparent)]
    NonRetryable(E),

    /// Every attempt failed with a retryable failure.
    #[error(transparent)]
    Exhausted(RetryExhaustedError<E>),
}

impl<E> RunError<E> {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, RunError::Exhausted(_))
    }

    pub fn is_non_retryable(&self) -> bool {
        matches!(self, RunError::NonRetryable(_))
    }

    pub fn exhausted(&self) -> Option<&RetryExhaustedError<E>> {
        match self {
            RunError::Exhausted(err) => Some(err),
            RunError::NonRetryable(_) => None,
        }
    }

    /// Returns the original failure if it was not retryable.
    pub fn into_non_retryable(self) -> Option<E> {
        match self {
            RunError::NonRetryable(err) => Some(err),
            RunError::Exhausted(_) => None,
        }
    }
}
