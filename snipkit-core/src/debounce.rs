//! Trailing-edge debounce for callbacks driven from async code.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::trace;

use crate::config::DebounceConfig;

type Callback<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Delays a callback until calls stop arriving for `delay`.
///
/// Every [`call`](Debouncer::call) cancels the pending invocation and
/// schedules a new one on the current Tokio runtime, so only the last
/// argument of a burst reaches the callback. Dropping the debouncer does
/// not cancel a pending invocation.
pub struct Debouncer<T> {
    callback: Callback<T>,
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T> fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("pending", &self.is_pending())
            .finish()
    }
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(
        delay: Duration,
        callback: impl Fn(T) + Send + Sync + 'static,
    ) -> Self {
        Self {
            callback: Arc::new(callback),
            delay,
            pending: Mutex::new(None),
        }
    }

    pub fn from_config(
        config: &DebounceConfig,
        callback: impl Fn(T) + Send + Sync + 'static,
    ) -> Self {
        Self::new(config.delay(), callback)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Reset the timer and remember `arg` for when it expires.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn call(&self, arg: T) {
        let callback = Arc::clone(&self.callback);
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback(arg);
        });

        if let Some(previous) = self.pending.lock().replace(handle) {
            trace!(delay_ms = delay.as_millis() as u64, "debounce rescheduled");
            previous.abort();
        }
    }

    /// Drop the pending invocation, if any.
    pub fn cancel(&self) {
        if let Some(previous) = self.pending.lock().take() {
            previous.abort();
        }
    }
}

impl<T> Debouncer<T> {
    /// Whether a scheduled invocation has not run yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}
