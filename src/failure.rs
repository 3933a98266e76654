use crate::kind::{Classify, FailureKind};

use std::error::Error;

type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// A general-purpose failure tagged with a [`FailureKind`].
///
/// `Failure` is a convenient error type for operations that do not already
/// have one. Its kind decides whether an executor retries it.
///
/// # Examples
///
/// ```rust
/// use retries::{Failure, FailureKind};
///
/// let err = Failure::new(FailureKind::Timeout, "upstream did not answer");
/// assert_eq!(err.to_string(), "timeout: upstream did not answer");
/// ```
#[derive(Debug, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct Failure {
    kind: FailureKind,
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl Failure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a [`FailureKind::Runtime`] failure.
    pub fn runtime(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Runtime, message)
    }

    /// Creates a [`FailureKind::Logic`] failure.
    pub fn logic(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Logic, message)
    }

    /// Attaches the underlying cause.
    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Classify for Failure {
    type Kind = FailureKind;

    fn kind(&self) -> FailureKind {
        self.kind
    }
}
