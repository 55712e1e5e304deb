//! Support modules for the destination autocomplete BDD tests.

#[path = "../support/runtime.rs"]
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use runtime::ensure_paused_runtime;
pub(crate) use state::AutocompleteState;
