//! Scenario state for the destination autocomplete BDD tests.

use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use wayfarer::DestinationSearch;

use super::runtime::SharedRuntime;

/// State shared across steps in an autocomplete scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct AutocompleteState {
    /// Paused-clock runtime that owns debounce timers and lookups.
    pub(crate) runtime: Slot<SharedRuntime>,
    /// Search box under test.
    pub(crate) search: Slot<DestinationSearch>,
}
