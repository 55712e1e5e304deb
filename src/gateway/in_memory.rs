//! Gateways over static JSON data.
//!
//! The listing page can run entirely against a local mock dataset. The
//! [`InMemoryListingGateway`] evaluates criteria client-side using
//! [`FilterCriteria::apply`], and the [`StaticDestinationGateway`] answers
//! suggestion queries from a fixed destination list.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::Deserialize;

use crate::autocomplete::popular_destinations;
use crate::error::WayfarerError;
use crate::filter::{FilterCriteria, PriceBounds};
use crate::models::{Destination, Listing, ListingPage};

use super::{DestinationGateway, ListingGateway};

/// Accepted layouts for listing files: a bare array or a page object.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListingDocument {
    Array(Vec<Listing>),
    Page { items: Vec<Listing> },
}

/// Listing gateway over an in-memory dataset.
#[derive(Debug, Clone, Default)]
pub struct InMemoryListingGateway {
    listings: Vec<Listing>,
}

impl InMemoryListingGateway {
    /// Wraps an existing dataset.
    #[must_use]
    pub const fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    /// Parses a dataset from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`WayfarerError::Decode`] when the text is neither an array
    /// of listings nor an object with an `items` array.
    pub fn from_json_str(json: &str) -> Result<Self, WayfarerError> {
        let document: ListingDocument =
            serde_json::from_str(json).map_err(|error| WayfarerError::Decode {
                message: format!("listing file: {error}"),
            })?;
        let listings = match document {
            ListingDocument::Array(listings) | ListingDocument::Page { items: listings } => {
                listings
            }
        };
        Ok(Self::new(listings))
    }

    /// Loads a dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`WayfarerError::Io`] when the file cannot be read and
    /// [`WayfarerError::Decode`] when its contents do not parse.
    pub fn from_json_file(path: &Utf8Path) -> Result<Self, WayfarerError> {
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let file_name = path.file_name().ok_or_else(|| WayfarerError::Io {
            message: format!("invalid listing file path '{path}': no file name"),
        })?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|error| {
            WayfarerError::Io {
                message: format!("failed to open directory '{parent}': {error}"),
            }
        })?;
        let contents = dir
            .read_to_string(file_name)
            .map_err(|error| WayfarerError::Io {
                message: format!("failed to read listing file '{path}': {error}"),
            })?;
        Self::from_json_str(&contents)
    }

    /// Full dataset.
    #[must_use]
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Observed price bounds of the dataset.
    #[must_use]
    pub fn price_bounds(&self) -> PriceBounds {
        PriceBounds::from_listings(&self.listings)
    }
}

#[async_trait]
impl ListingGateway for InMemoryListingGateway {
    async fn search_listings(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<ListingPage, WayfarerError> {
        Ok(ListingPage::from_items(criteria.apply(&self.listings)))
    }
}

/// Destination gateway answering from a fixed list.
#[derive(Debug, Clone)]
pub struct StaticDestinationGateway {
    destinations: Vec<Destination>,
}

impl Default for StaticDestinationGateway {
    fn default() -> Self {
        Self::new(popular_destinations())
    }
}

impl StaticDestinationGateway {
    /// Wraps a destination list.
    #[must_use]
    pub const fn new(destinations: Vec<Destination>) -> Self {
        Self { destinations }
    }
}

#[async_trait]
impl DestinationGateway for StaticDestinationGateway {
    async fn suggest_destinations(&self, query: &str) -> Result<Vec<Destination>, WayfarerError> {
        let needle = query.trim().to_lowercase();
        Ok(self
            .destinations
            .iter()
            .filter(|destination| {
                destination.city.to_lowercase().contains(&needle)
                    || destination.country.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }
}
