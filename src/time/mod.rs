//! Blocking time utilities.
//!
//! This module provides the wait primitive used between retry attempts.
//!
//! It includes:
//! - [`Sleeper`], the trait a retry executor waits through,
//! - [`ThreadSleep`], the default sleeper backed by [`std::thread::sleep`].

mod sleep;

#[doc(inline)]
pub use sleep::{Sleeper, ThreadSleep};
