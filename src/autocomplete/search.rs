//! Async driver wiring the destination box to a suggestion gateway.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::debounce::Debouncer;
use crate::gateway::DestinationGateway;
use crate::models::Destination;

use super::state::{DestinationAutocomplete, LookupRequest};

/// Shared state plus gateway; cloned into debounced lookups.
#[derive(Clone)]
struct DestinationLookup {
    state: Arc<Mutex<DestinationAutocomplete>>,
    gateway: Arc<dyn DestinationGateway>,
    in_flight: Arc<Mutex<Option<JoinHandle<bool>>>>,
}

impl DestinationLookup {
    fn with_state<R>(&self, f: impl FnOnce(&mut DestinationAutocomplete) -> R) -> R {
        let mut guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    async fn run(&self, request: LookupRequest) -> bool {
        let result = self.gateway.suggest_destinations(&request.query).await;
        self.with_state(|state| state.complete_lookup(request.token, result))
    }

    fn track(&self, handle: JoinHandle<bool>) {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        *in_flight = Some(handle);
    }

    fn take_in_flight(&self) -> Option<JoinHandle<bool>> {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

/// Search-as-you-type destination box.
///
/// Keystrokes update the dropdown state immediately; the remote lookup is
/// debounced and stale responses are dropped by token.
pub struct DestinationSearch {
    lookup: DestinationLookup,
    input: Debouncer<LookupRequest>,
}

impl std::fmt::Debug for DestinationSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DestinationSearch")
            .field("input", &self.input)
            .finish_non_exhaustive()
    }
}

impl DestinationSearch {
    /// Creates a search box that queries `gateway` after `window` of quiet.
    #[must_use]
    pub fn new(gateway: Arc<dyn DestinationGateway>, window: Duration) -> Self {
        let lookup = DestinationLookup {
            state: Arc::new(Mutex::new(DestinationAutocomplete::default())),
            gateway,
            in_flight: Arc::new(Mutex::new(None)),
        };
        let runner = lookup.clone();
        let input = Debouncer::new(window, move |request: LookupRequest| {
            let task = runner.clone();
            if let Ok(handle) = Handle::try_current() {
                runner.track(handle.spawn(async move { task.run(request).await }));
            } else {
                warn!("no Tokio runtime available; skipping destination lookup");
            }
        });
        Self { lookup, input }
    }

    /// Handles a keystroke.
    pub fn type_text(&self, text: &str) {
        match self.lookup.with_state(|state| state.on_input(text)) {
            Some(request) => self.input.push(request),
            None => self.input.cancel(),
        }
    }

    /// Runs a lookup for the current input immediately, bypassing the
    /// debounce window. Returns false when the input is too short or the
    /// response was superseded.
    pub async fn lookup_now(&self) -> bool {
        self.input.cancel();
        let input = self.input_text();
        let Some(request) = self.lookup.with_state(|state| state.on_input(input)) else {
            return false;
        };
        self.lookup.run(request).await
    }

    /// Waits until the debounce window has elapsed and the most recent
    /// debounced lookup has resolved.
    ///
    /// Returns false when nothing was looked up or the latest response was
    /// superseded.
    pub async fn settled(&self) -> bool {
        while self.input.is_pending() {
            tokio::time::sleep(self.input.window()).await;
        }
        let Some(handle) = self.lookup.take_in_flight() else {
            return false;
        };
        match handle.await {
            Ok(accepted) => accepted,
            Err(error) => {
                warn!(%error, "destination lookup task did not complete");
                false
            }
        }
    }

    /// Chooses a destination from the dropdown.
    pub fn select(&self, destination: Destination) {
        self.input.cancel();
        self.lookup.with_state(|state| state.select(destination));
    }

    /// Current suggestions.
    #[must_use]
    pub fn suggestions(&self) -> Vec<Destination> {
        self.lookup.with_state(|state| state.suggestions())
    }

    /// Current suggestion labels.
    #[must_use]
    pub fn suggestion_labels(&self) -> Vec<String> {
        self.lookup.with_state(|state| state.suggestion_labels())
    }

    /// Whether the dropdown is shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.lookup.with_state(|state| state.is_open())
    }

    /// Current input text.
    #[must_use]
    pub fn input_text(&self) -> String {
        self.lookup.with_state(|state| state.input().to_owned())
    }

    /// Selected destination, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Destination> {
        self.lookup.with_state(|state| state.selected().cloned())
    }
}
