//! Scenario state and gated gateway for the filter store BDD tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use wayfarer::telemetry::test_support::RecordingTelemetrySink;
use wayfarer::{
    FetchOutcome, FilterCriteria, FilterStore, Listing, ListingGateway, ListingPage,
    ListingSession, WayfarerError,
};

use super::runtime::SharedRuntime;

/// State shared across steps in a filter store scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct FilterState {
    /// Store under test for synchronous scenarios.
    pub(crate) store: Slot<FilterStore>,
    /// Runtime driving asynchronous scenarios.
    pub(crate) runtime: Slot<SharedRuntime>,
    /// Session under test for asynchronous scenarios.
    pub(crate) session: Slot<ListingSession>,
    /// Gateway whose responses are released by steps.
    pub(crate) gateway: Slot<Arc<GatedGateway>>,
    /// In-flight fetches keyed by search text.
    pub(crate) fetches: Slot<HashMap<String, JoinHandle<FetchOutcome>>>,
    /// Recording telemetry sink for capturing events.
    pub(crate) telemetry_sink: Slot<Arc<RecordingTelemetrySink>>,
}

/// Listing gateway that answers each search only when the step releases it.
#[derive(Default)]
pub(crate) struct GatedGateway {
    senders: Mutex<HashMap<String, oneshot::Sender<ListingPage>>>,
    receivers: Mutex<HashMap<String, oneshot::Receiver<ListingPage>>>,
}

impl GatedGateway {
    /// Prepares a gate for `search`; the fetch waits until it is released.
    pub(crate) fn gate(&self, search: &str) {
        let (sender, receiver) = oneshot::channel();
        self.senders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(search.to_owned(), sender);
        self.receivers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(search.to_owned(), receiver);
    }

    /// Releases the response for `search`.
    pub(crate) fn release(&self, search: &str, page: ListingPage) -> Result<(), String> {
        let sender = self
            .senders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(search)
            .ok_or_else(|| format!("no gate for '{search}'"))?;
        sender
            .send(page)
            .map_err(|_| format!("fetch for '{search}' is no longer waiting"))
    }
}

#[async_trait]
impl ListingGateway for GatedGateway {
    async fn search_listings(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<ListingPage, WayfarerError> {
        let receiver = self
            .receivers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&criteria.search)
            .ok_or_else(|| WayfarerError::Network {
                message: format!("no gate for '{}'", criteria.search),
            })?;
        receiver.await.map_err(|error| WayfarerError::Network {
            message: error.to_string(),
        })
    }
}

/// Builds a page of `count` listings with sequential ids.
pub(crate) fn page_of(count: u64) -> ListingPage {
    ListingPage::from_items(
        (1..=count)
            .map(|id| Listing {
                id,
                name: format!("Hotel {id}"),
                ..Listing::default()
            })
            .collect(),
    )
}
