//! Wayfarer library crate coordinating hotel listing search state.
//!
//! The library owns the filter criteria of a listing page, coalesces rapid
//! input through debouncers, fetches results through listing gateways while
//! discarding stale responses, and drives the destination autocomplete.

pub mod autocomplete;
pub mod config;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod gateway;
pub mod models;
pub mod session;
pub mod store;
pub mod telemetry;

pub use autocomplete::{
    DestinationAutocomplete, DestinationSearch, LookupRequest, MIN_QUERY_CHARS,
    match_destinations, popular_destinations,
};
pub use config::{ListingSource, OperationMode, WayfarerConfig};
pub use debounce::{DebounceWindows, Debouncer, PRICE_DEBOUNCE, SEARCH_DEBOUNCE};
pub use error::WayfarerError;
pub use filter::{FilterCriteria, PriceBounds, PriceRange, SortKey};
pub use gateway::{
    DestinationGateway, HttpDestinationGateway, HttpGatewayConfig, HttpListingGateway,
    InMemoryListingGateway, ListingGateway, StaticDestinationGateway,
};
pub use models::{Destination, Listing, ListingPage};
pub use session::ListingSession;
pub use store::{FetchOutcome, FilterStore, PendingFetch, RequestToken, ResultSet};
pub use telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetryEvent, TelemetrySink};
