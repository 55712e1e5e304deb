//! Timer-based coalescing of rapid input changes.
//!
//! A [`Debouncer`] commits only the last value pushed within a quiescence
//! window. Every push restarts the window. Dropping the debouncer cancels any
//! pending commit, which ties pending work to the lifetime of the input that
//! owns it.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::warn;

/// Quiescence window for free-text search input.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);
/// Quiescence window for price-range slider drags.
pub const PRICE_DEBOUNCE: Duration = Duration::from_millis(250);

/// Quiescence windows for the inputs of one listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceWindows {
    /// Window for free-text search input.
    pub search: Duration,
    /// Window for price-range slider drags.
    pub price: Duration,
}

impl Default for DebounceWindows {
    fn default() -> Self {
        Self {
            search: SEARCH_DEBOUNCE,
            price: PRICE_DEBOUNCE,
        }
    }
}

type Commit<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Coalesces values and commits the last one after a quiet period.
pub struct Debouncer<T> {
    window: Duration,
    commit: Commit<T>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T> std::fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("window", &self.window)
            .field("pending", &self.is_pending())
            .finish_non_exhaustive()
    }
}

impl<T: Send + 'static> Debouncer<T> {
    /// Creates a debouncer that calls `commit` after `window` of quiet.
    #[must_use]
    pub fn new(window: Duration, commit: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            window,
            commit: Arc::new(commit),
            pending: Mutex::new(None),
        }
    }

    /// Quiescence window.
    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Records a new value and restarts the quiescence window.
    ///
    /// Outside a Tokio runtime there is no timer to wait on, so the value
    /// is committed immediately.
    pub fn push(&self, value: T) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
        }

        let Ok(handle) = Handle::try_current() else {
            warn!("no Tokio runtime available; committing debounced value immediately");
            (self.commit)(value);
            return;
        };

        let commit = Arc::clone(&self.commit);
        let window = self.window;
        *pending = Some(handle.spawn(async move {
            tokio::time::sleep(window).await;
            commit(value);
        }));
    }

    /// Drops the pending value, if any, without committing it.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
        }
    }
}

impl<T> Debouncer<T> {
    /// Returns true while a value is waiting for its window to elapse.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        let pending = self
            .pending
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
        }
    }
}
