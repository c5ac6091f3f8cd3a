// ── Debounced query controller ──
//
// Collapses bursts of search-box keystrokes into at most one list
// fetch per quiet period. Only *issuance* is throttled; completion
// ordering is handled by the resource cell's sequence token.

use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Quiet period before a pending query fires.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

/// Two-state controller: idle, or one pending fetch armed on a timer.
///
/// Every submission cancels the pending timer and arms a fresh one;
/// on expiry exactly one fetch runs. Dropping the controller
/// (component teardown) cancels whatever is pending.
pub struct QueryDebouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl QueryDebouncer {
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_DEBOUNCE)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Arm `fetch` to run after the quiet period, cancelling any fetch
    /// still pending from an earlier submission.
    pub fn submit<F, Fut>(&self, fetch: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            fetch().await;
        });

        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = pending.replace(handle) {
            previous.abort();
        }
    }

    /// Cancel the pending fetch, if any, without issuing it.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = pending.take() {
            previous.abort();
        }
    }
}

impl Default for QueryDebouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for QueryDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
