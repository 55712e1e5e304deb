//! Records exchanged with the listing and destination collaborators.
//!
//! These types mirror the JSON shapes served by the listing API. The store
//! reads them for display and sorting but does not otherwise validate or
//! transform them.

use serde::{Deserialize, Serialize};

/// A single hotel listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Listing {
    /// Listing identifier.
    pub id: u64,
    /// Hotel name.
    pub name: String,
    /// Free-text location (city, district).
    pub location: String,
    /// Star classification, usually 1 to 5.
    pub stars: u8,
    /// Guest rating on a 0 to 5 scale.
    pub rating: f64,
    /// Nightly price in `currency`.
    pub actual_price: f64,
    /// ISO currency code.
    pub currency: String,
    /// Latitude of the property.
    pub latitude: f64,
    /// Longitude of the property.
    pub longitude: f64,
    /// Amenity labels offered by the property.
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Free-form tags used by quick filters (e.g. `Free Cancellation`).
    #[serde(default)]
    pub tags: Vec<String>,
}

/// One page of listings returned by a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ListingPage {
    /// Listings matching the submitted criteria.
    pub items: Vec<Listing>,
    /// Total number of matches known to the service.
    pub total: u64,
}

impl ListingPage {
    /// Builds a page whose total equals the number of items.
    #[must_use]
    pub fn from_items(items: Vec<Listing>) -> Self {
        let total = u64::try_from(items.len()).unwrap_or(u64::MAX);
        Self { items, total }
    }
}

/// A destination offered by the autocomplete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Destination {
    /// Destination identifier.
    pub id: u64,
    /// City name, e.g. `Dubai`.
    pub city: String,
    /// Country name, e.g. `United Arab Emirates`.
    pub country: String,
    /// ISO 3166 alpha-2 country code.
    pub country_code: String,
    /// Latitude of the city centre.
    pub latitude: f64,
    /// Longitude of the city centre.
    pub longitude: f64,
    /// Availability status reported by the service (e.g. `active`).
    pub status: String,
}

impl Destination {
    /// Returns the dropdown label, `"{city}, {country}"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_decodes_without_optional_collections() {
        let listing: Listing = serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "Harbour View",
            "location": "Dubai Marina",
            "stars": 4,
            "rating": 4.3,
            "actual_price": 180.0,
            "currency": "AED",
            "latitude": 25.08,
            "longitude": 55.14
        }))
        .expect("listing should decode");

        assert_eq!(listing.id, 7);
        assert!(listing.amenities.is_empty());
        assert!(listing.tags.is_empty());
    }

    #[test]
    fn destination_label_joins_city_and_country() {
        let destination = Destination {
            city: "Dubai".to_owned(),
            country: "United Arab Emirates".to_owned(),
            ..Destination::default()
        };

        assert_eq!(destination.label(), "Dubai, United Arab Emirates");
    }
}
