//! Retry utilities for blocking operations.
//!
//! This module provides an executor that re-invokes a fallible closure
//! with a fixed wait between attempts, retrying only failures of a
//! configured kind.
//!
//! The main entry point is [`retry`], which wraps an operation in a
//! [`RetryExecutor`]. When every attempt fails, the caller receives a
//! [`RetryExhaustedError`] holding each suppressed failure in order.

mod config;
mod error;
mod retry;

#[doc(inline)]
pub use config::{RetryConfig, WaitPolicy};

#[doc(inline)]
pub use error::{RetryExhaustedError, RunError};

#[doc(inline)]
pub use retry::{RetryExecutor, retry};
