//! Async driver for one listing page.
//!
//! A [`ListingSession`] owns a [`FilterStore`] together with the listing
//! gateway and a telemetry sink. Each listing page creates its own session
//! when it mounts and drops it when it unmounts; sessions share nothing, so
//! several can run side by side.
//!
//! The store lock is never held across an `.await`: a fetch is issued under
//! the lock, awaited without it, and completed under the lock again. The
//! store's request tokens decide whether the response is still wanted.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use tokio::runtime::Handle;
use tracing::{info, warn};

use crate::debounce::{DebounceWindows, Debouncer};
use crate::filter::FilterCriteria;
use crate::gateway::ListingGateway;
use crate::store::{FetchOutcome, FilterStore, PendingFetch, ResultSet};
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

/// Shared handle to a listing page's store and collaborators.
#[derive(Clone)]
pub struct ListingSession {
    store: Arc<Mutex<FilterStore>>,
    gateway: Arc<dyn ListingGateway>,
    telemetry: Arc<dyn TelemetrySink>,
    windows: DebounceWindows,
}

impl std::fmt::Debug for ListingSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListingSession")
            .field("store", &self.store)
            .field("windows", &self.windows)
            .finish_non_exhaustive()
    }
}

impl ListingSession {
    /// Creates a session around `store` that fetches through `gateway`.
    #[must_use]
    pub fn new(store: FilterStore, gateway: Arc<dyn ListingGateway>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            gateway,
            telemetry: Arc::new(NoopTelemetrySink),
            windows: DebounceWindows::default(),
        }
    }

    /// Replaces the telemetry sink.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Replaces the debounce windows used by [`Self::search_input`] and
    /// [`Self::price_input`].
    #[must_use]
    pub const fn with_debounce_windows(mut self, windows: DebounceWindows) -> Self {
        self.windows = windows;
        self
    }

    /// Debounce windows applied to this session's inputs.
    #[must_use]
    pub const fn debounce_windows(&self) -> DebounceWindows {
        self.windows
    }

    /// Runs `f` against the store.
    ///
    /// This is the only way widgets mutate the criteria.
    pub fn update<R>(&self, f: impl FnOnce(&mut FilterStore) -> R) -> R {
        let mut guard = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Snapshot of the current criteria.
    #[must_use]
    pub fn criteria(&self) -> FilterCriteria {
        self.update(|store| store.criteria().clone())
    }

    /// Snapshot of the current result set.
    #[must_use]
    pub fn results(&self) -> ResultSet {
        self.update(|store| store.results().clone())
    }

    /// Snapshots the criteria and fetches a new result set.
    pub async fn apply_filter(&self) -> FetchOutcome {
        let pending = self.update(FilterStore::apply_filter);
        self.fetch(pending).await
    }

    /// Restores the default criteria and fetches a new result set.
    pub async fn reset_filters(&self) -> FetchOutcome {
        let pending = self.update(FilterStore::reset_filters);
        self.fetch(pending).await
    }

    /// Runs a fetch previously issued by the store and completes it.
    pub async fn fetch(&self, pending: PendingFetch) -> FetchOutcome {
        let started = Instant::now();
        let result = self.gateway.search_listings(&pending.criteria).await;
        let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let failure = result.as_ref().err().map(ToString::to_string);

        let (outcome, item_count, latest) = self.update(|store| {
            let outcome = store.complete_fetch(pending.token, result);
            let latest = store.latest_token().map_or(0, |token| token.value());
            (outcome, store.results().items.len(), latest)
        });

        match outcome {
            FetchOutcome::Applied | FetchOutcome::Empty => {
                info!(latency_ms, item_count, "listing results updated");
                self.telemetry.record(TelemetryEvent::FetchCompleted {
                    latency_ms,
                    item_count,
                });
            }
            FetchOutcome::Stale => {
                self.telemetry.record(TelemetryEvent::StaleResponseDropped {
                    token: pending.token.value(),
                    latest,
                });
            }
            FetchOutcome::Failed => {
                self.telemetry.record(TelemetryEvent::FetchFailed {
                    message: failure.unwrap_or_default(),
                });
            }
        }
        outcome
    }

    /// Debounced binding for the free-text search box.
    ///
    /// The last text typed within the search window is written to the store
    /// and a fetch is started. Dropping the returned debouncer cancels a
    /// pending commit.
    #[must_use]
    pub fn search_input(&self) -> Debouncer<String> {
        let session = self.clone();
        Debouncer::new(self.windows.search, move |text: String| {
            session.update(|store| store.set_search(text));
            session.spawn_apply();
        })
    }

    /// Debounced binding for the price-range slider.
    #[must_use]
    pub fn price_input(&self) -> Debouncer<(f64, f64)> {
        let session = self.clone();
        Debouncer::new(self.windows.price, move |(min, max): (f64, f64)| {
            session.update(|store| store.set_price_range(min, max));
            session.spawn_apply();
        })
    }

    fn spawn_apply(&self) {
        let Ok(handle) = Handle::try_current() else {
            warn!("no Tokio runtime available; filter change not fetched");
            return;
        };
        let session = self.clone();
        handle.spawn(async move {
            session.apply_filter().await;
        });
    }
}
