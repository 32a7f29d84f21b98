//! Trailing-edge debouncing of repeated calls
//!
//! A debounced wrapper holds its callback back until a full quiet
//! period passes with no further calls. Every call supersedes the one
//! before it: the pending timer is cancelled and a fresh one starts,
//! so only the last value of a burst ever reaches the callback.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::trace;

/// Wraps `callback` so it only runs after `delay` of call silence,
/// with the value from the newest call.
///
/// Must be used from within a tokio runtime. A zero `delay` still
/// defers to the timer, so same-tick bursts collapse to their last
/// value.
pub fn debounce<T, F>(callback: F, delay: Duration) -> Debounced<T>
where
    T: Send + 'static,
    F: Fn(T) + Send + Sync + 'static,
{
    Debounced {
        inner: Arc::new(Inner {
            callback: Box::new(callback),
            delay,
            pending: Mutex::new(None),
        }),
    }
}

/// Debounced wrapper around a callback. Clones share one pending-timer
/// slot, so calls through any clone supersede each other.
pub struct Debounced<T> {
    inner: Arc<Inner<T>>,
}

struct Inner<T> {
    callback: Box<dyn Fn(T) + Send + Sync>,
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debounced<T> {
    /// Supersedes any pending call and schedules `value` for delivery
    /// once the quiet period runs out.
    pub fn call(&self, value: T) {
        let inner = Arc::clone(&self.inner);
        let mut pending = self.inner.pending.lock();
        if let Some(previous) = pending.take() {
            // A timer that has not fired yet loses to the newer call.
            previous.abort();
            trace!("superseded pending debounced call");
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(inner.delay).await;
            trace!("quiet period over, delivering debounced call");
            (inner.callback)(value);
        }));
    }

    /// Whether a scheduled call is still waiting out its quiet period.
    pub fn is_pending(&self) -> bool {
        self.inner
            .pending
            .lock()
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }
}

impl<T> Clone for Debounced<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
