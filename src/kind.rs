//! Failure kinds and retry-eligibility classification.
//!
//! A retry executor never inspects failures directly. Instead every failure
//! reports a [`Kind`] through [`Classify`], and the executor asks whether that
//! kind [`is_a`](Kind::is_a) the configured retryable kind. Matching is
//! covariant: a sub-kind matches every one of its ancestors.
//!
//! [`FailureKind`] is the built-in hierarchy. Callers with their own error
//! taxonomy implement [`Kind`] for it and pick their own
//! [`DEFAULT_RETRYABLE`](Kind::DEFAULT_RETRYABLE).

use std::fmt;
use std::io;

/// A family of failure kinds arranged as a tree.
pub trait Kind: Copy + Eq + fmt::Debug {
    /// The kind an executor retries when none is configured.
    const DEFAULT_RETRYABLE: Self;

    /// Returns the direct super-kind, or `None` for a root kind.
    fn parent(self) -> Option<Self>;

    /// Returns `true` if `self` equals `ancestor` or descends from it.
    fn is_a(self, ancestor: Self) -> bool {
        let mut current = Some(self);

        while let Some(kind) = current {
            if kind == ancestor {
                return true;
            }
            current = kind.parent();
        }

        false
    }
}

/// A failure value that can report its kind.
pub trait Classify {
    /// The kind family this failure belongs to.
    type Kind: Kind;

    /// Returns the runtime kind of this failure.
    fn kind(&self) -> Self::Kind;
}

/// The built-in failure hierarchy.
///
/// ```text
/// Failure
/// ├── Runtime          (default retryable kind)
/// │   ├── Io
/// │   ├── Timeout
/// │   ├── Unavailable
/// │   └── InvalidState
/// └── Logic            (programming errors)
///     ├── InvalidArgument
///     └── Unsupported
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Root of the hierarchy. Every kind is a `Failure`.
    Failure,

    /// Failures that can only be detected while running.
    Runtime,
    /// An I/O operation failed.
    Io,
    /// An operation did not complete in time.
    Timeout,
    /// A peer or resource is temporarily unreachable.
    Unavailable,
    /// The operation observed a state it could not proceed from.
    InvalidState,

    /// Programming errors. Retrying these cannot succeed.
    Logic,
    /// An argument was rejected.
    InvalidArgument,
    /// The requested operation is not supported.
    Unsupported,
}

impl FailureKind {
    /// Returns a short lowercase name for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::Failure => "failure",
            FailureKind::Runtime => "runtime",
            FailureKind::Io => "io",
            FailureKind::Timeout => "timeout",
            FailureKind::Unavailable => "unavailable",
            FailureKind::InvalidState => "invalid state",
            FailureKind::Logic => "logic",
            FailureKind::InvalidArgument => "invalid argument",
            FailureKind::Unsupported => "unsupported",
        }
    }
}

impl Kind for FailureKind {
    const DEFAULT_RETRYABLE: Self = FailureKind::Runtime;

    fn parent(self) -> Option<Self> {
        match self {
            FailureKind::Failure => None,
            FailureKind::Runtime | FailureKind::Logic => Some(FailureKind::Failure),
            FailureKind::Io
            | FailureKind::Timeout
            | FailureKind::Unavailable
            | FailureKind::InvalidState => Some(FailureKind::Runtime),
            FailureKind::InvalidArgument | FailureKind::Unsupported => Some(FailureKind::Logic),
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Classify for FailureKind {
    type Kind = FailureKind;

    fn kind(&self) -> FailureKind {
        *self
    }
}

impl Classify for io::Error {
    type Kind = FailureKind;

    fn kind(&self) -> FailureKind {
        match io::Error::kind(self) {
            io::ErrorKind::InvalidInput | io::ErrorKind::InvalidData => {
                FailureKind::InvalidArgument
            }
            io::ErrorKind::Unsupported => FailureKind::Unsupported,
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => FailureKind::Timeout,
            io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::NotConnected
            | io::ErrorKind::BrokenPipe => FailureKind::Unavailable,
            _ => FailureKind::Io,
        }
    }
}
