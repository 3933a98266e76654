use std::thread;
use std::time::Duration;

/// Blocks the calling thread between retry attempts.
///
/// Any `FnMut(Duration)` closure is a `Sleeper`, which makes it easy to
/// record or skip waits in tests.
///
/// # Examples
///
/// ```rust
/// use retries::time::Sleeper;
/// use std::time::Duration;
///
/// let mut waits = Vec::new();
/// let mut record = |d: Duration| waits.push(d);
/// record.sleep(Duration::from_millis(5));
/// assert_eq!(waits, [Duration::from_millis(5)]);
/// ```
pub trait Sleeper {
    /// Waits for `duration` before returning.
    fn sleep(&mut self, duration: Duration);
}

/// A sleeper that parks the current thread with [`thread::sleep`].
///
/// The wait cannot be cancelled. A zero duration returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

impl Sleeper for ThreadSleep {
    fn sleep(&mut self, duration: Duration) {
        if duration.is_zero() {
            return;
        }

        thread::sleep(duration);
    }
}

impl<F> Sleeper for F
where
    F: FnMut(Duration),
{
    fn sleep(&mut self, duration: Duration) {
        self(duration)
    }
}
