//! Leading-edge throttling of repeated calls
//!
//! A throttled wrapper runs its callback immediately, then ignores
//! further calls until a full interval has passed since the previous
//! execution. Dropped calls are gone for good; nothing is queued and
//! no trailing call fires.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;
use tracing::trace;

/// Wraps `callback` so it runs at most once per `delay`, measured from
/// the previous execution on a monotonic clock.
///
/// A zero `delay` lets every call through.
pub fn throttle<T, F>(callback: F, delay: Duration) -> Throttled<T>
where
    F: Fn(T) + Send + Sync + 'static,
{
    Throttled {
        callback: Box::new(callback),
        delay,
        last_run: Mutex::new(None),
        executed: AtomicU64::new(0),
        dropped: AtomicU64::new(0),
    }
}

/// Throttled wrapper around a callback. Share across tasks behind an
/// `Arc`; `call` only needs `&self`.
pub struct Throttled<T> {
    callback: Box<dyn Fn(T) + Send + Sync>,
    delay: Duration,
    last_run: Mutex<Option<Instant>>,
    executed: AtomicU64,
    dropped: AtomicU64,
}

impl<T> Throttled<T> {
    /// Runs the callback if the interval has reopened, otherwise drops
    /// the call.
    ///
    /// The decision and the timestamp update happen atomically under
    /// the lock; the callback itself runs after the lock is released,
    /// so a re-entrant call from inside the callback is dropped rather
    /// than deadlocked.
    pub fn call(&self, value: T) {
        let now = Instant::now();
        let due = {
            let mut last_run = self.last_run.lock();
            match *last_run {
                Some(last) if now.duration_since(last) < self.delay => false,
                _ => {
                    *last_run = Some(now);
                    true
                }
            }
        };
        if due {
            self.executed.fetch_add(1, Ordering::Relaxed);
            (self.callback)(value);
        } else {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            trace!("dropped throttled call inside interval");
        }
    }

    /// Calls that reached the callback.
    pub fn executed_count(&self) -> u64 {
        self.executed.load(Ordering::Relaxed)
    }

    /// Calls dropped inside the interval.
    pub fn dropped_count(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}
