//! Gateways for the listing search and destination suggestion services.
//!
//! The store and autocomplete never talk to a transport directly. They go
//! through these traits so that tests can substitute mocks while the HTTP
//! implementations handle real requests and the in-memory implementations
//! serve static JSON data.

mod error_mapping;
mod http;
mod in_memory;

pub use http::{HttpDestinationGateway, HttpGatewayConfig, HttpListingGateway};
pub use in_memory::{InMemoryListingGateway, StaticDestinationGateway};

use async_trait::async_trait;

use crate::error::WayfarerError;
use crate::filter::FilterCriteria;
use crate::models::{Destination, ListingPage};

/// Gateway that can search hotel listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingGateway: Send + Sync {
    /// Returns the listings matching a criteria snapshot.
    ///
    /// Implementations must be idempotent for identical snapshots.
    async fn search_listings(&self, criteria: &FilterCriteria)
    -> Result<ListingPage, WayfarerError>;
}

/// Gateway that can suggest destinations for partial input.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DestinationGateway: Send + Sync {
    /// Returns destinations matching a free-text query.
    async fn suggest_destinations(&self, query: &str) -> Result<Vec<Destination>, WayfarerError>;
}
