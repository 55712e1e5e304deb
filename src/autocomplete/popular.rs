//! Popular destinations shown before, or instead of, remote suggestions.

use crate::models::Destination;

const POPULAR: [(u64, &str, &str, &str, f64, f64); 10] = [
    (1, "Paris", "France", "FR", 48.8566, 2.3522),
    (2, "Dubai", "United Arab Emirates", "AE", 25.2048, 55.2708),
    (3, "London", "United Kingdom", "GB", 51.5074, -0.1278),
    (4, "New York", "United States", "US", 40.7128, -74.0060),
    (5, "Tokyo", "Japan", "JP", 35.6762, 139.6503),
    (6, "Rome", "Italy", "IT", 41.9028, 12.4964),
    (7, "Barcelona", "Spain", "ES", 41.3874, 2.1686),
    (8, "Istanbul", "Turkey", "TR", 41.0082, 28.9784),
    (9, "Bangkok", "Thailand", "TH", 13.7563, 100.5018),
    (10, "Singapore", "Singapore", "SG", 1.3521, 103.8198),
];

/// Returns the fixed popular-destination list in display order.
#[must_use]
pub fn popular_destinations() -> Vec<Destination> {
    POPULAR
        .iter()
        .map(
            |&(id, city, country, country_code, latitude, longitude)| Destination {
                id,
                city: city.to_owned(),
                country: country.to_owned(),
                country_code: country_code.to_owned(),
                latitude,
                longitude,
                status: "active".to_owned(),
            },
        )
        .collect()
}
