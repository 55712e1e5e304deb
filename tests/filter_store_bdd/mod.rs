//! Support modules for the filter store BDD tests.

#[path = "../support/runtime.rs"]
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use runtime::ensure_runtime;
pub(crate) use state::{FilterState, GatedGateway, page_of};
