//! # Retries
//!
//! **Retries** is a small, synchronous retry executor. It wraps a
//! zero-argument operation and invokes it again on failure, up to a fixed
//! number of attempts, blocking for a fixed delay between attempts.
//!
//! Which failures are retried is decided by kind. Every failure reports a
//! [`Kind`] through [`Classify`], and a failure is retried when its kind is
//! the configured retryable kind or one of its sub-kinds. Anything else is
//! handed back to the caller untouched on its first occurrence.
//!
//! ## Quick Start
//!
//! ```rust
//! use retries::tools::{retry, RunError};
//! use retries::{Failure, FailureKind};
//! use std::time::Duration;
//!
//! let result = retry(|| Err::<(), _>(Failure::new(FailureKind::Timeout, "no answer")))
//!     .set_max_attempts(2)
//!     .set_wait_duration(Duration::from_millis(1))
//!     .run();
//!
//! match result {
//!     Err(RunError::Exhausted(err)) => assert_eq!(err.suppressed().len(), 2),
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`tools`] — The retry executor and its errors
//! - [`time`] — The blocking wait used between attempts
//! - [`kind`] — Failure kinds and classification

mod failure;

pub mod kind;
pub mod time;
pub mod tools;

pub use failure::Failure;
pub use kind::{Classify, FailureKind, Kind};
