//! Client-side evaluation of filter criteria over an in-memory listing set.
//!
//! The listing API normally evaluates criteria server-side. The mock API
//! that backs local development serves a static array instead, so the same
//! rules are applied here.

use crate::models::Listing;

use super::criteria::{FilterCriteria, SortKey};

/// Quick filter selecting listings rated at least [`TOP_RATED_THRESHOLD`].
pub const QUICK_FILTER_TOP_RATED: &str = "Top Rated";
/// Quick filter selecting five-star listings.
pub const QUICK_FILTER_LUXURY: &str = "Luxury";
/// Minimum guest rating for the `Top Rated` chip.
pub const TOP_RATED_THRESHOLD: f64 = 4.5;

impl FilterCriteria {
    /// Returns true if `listing` satisfies every active criterion.
    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        self.matches_search(listing)
            && self.price_range.contains(listing.actual_price)
            && (self.stars.is_empty() || self.stars.contains(&listing.stars))
            && (self.guest_rating <= 0.0 || listing.rating >= self.guest_rating)
            && self.matches_amenities(listing)
            && self
                .quick_filter
                .as_deref()
                .is_none_or(|tag| quick_filter_matches(tag, listing))
    }

    fn matches_search(&self, listing: &Listing) -> bool {
        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || listing.name.to_lowercase().contains(&needle)
            || listing.location.to_lowercase().contains(&needle)
    }

    fn matches_amenities(&self, listing: &Listing) -> bool {
        self.amenities.iter().all(|wanted| {
            listing
                .amenities
                .iter()
                .any(|offered| offered.eq_ignore_ascii_case(wanted))
        })
    }

    /// Filters and sorts `listings` according to the criteria.
    #[must_use]
    pub fn apply(&self, listings: &[Listing]) -> Vec<Listing> {
        let mut matching: Vec<Listing> = listings
            .iter()
            .filter(|listing| self.matches(listing))
            .cloned()
            .collect();
        sort_listings(&mut matching, self.sort);
        matching
    }
}

/// Evaluates a single quick-filter chip against a listing.
///
/// Known presets have fixed rules; any other label matches a listing tag
/// case-insensitively.
#[must_use]
pub fn quick_filter_matches(tag: &str, listing: &Listing) -> bool {
    if tag.eq_ignore_ascii_case(QUICK_FILTER_TOP_RATED) {
        listing.rating >= TOP_RATED_THRESHOLD
    } else if tag.eq_ignore_ascii_case(QUICK_FILTER_LUXURY) {
        listing.stars == 5
    } else {
        listing
            .tags
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(tag))
    }
}

/// Reorders `listings` in place; the sort is stable so ties keep source
/// order.
pub fn sort_listings(listings: &mut [Listing], key: SortKey) {
    match key {
        SortKey::Popularity => {}
        SortKey::LowToHigh => listings.sort_by(|a, b| a.actual_price.total_cmp(&b.actual_price)),
        SortKey::HighToLow => listings.sort_by(|a, b| b.actual_price.total_cmp(&a.actual_price)),
        SortKey::Rating => listings.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::filter::criteria::PriceBounds;

    fn listing(id: u64, name: &str, stars: u8, rating: f64, price: f64) -> Listing {
        Listing {
            id,
            name: name.to_owned(),
            location: "Dubai".to_owned(),
            stars,
            rating,
            actual_price: price,
            currency: "USD".to_owned(),
            ..Listing::default()
        }
    }

    #[fixture]
    fn listings() -> Vec<Listing> {
        vec![
            Listing {
                amenities: vec!["Pool".to_owned(), "WiFi".to_owned()],
                tags: vec!["Free Cancellation".to_owned()],
                ..listing(1, "Palm Resort", 5, 4.8, 420.0)
            },
            Listing {
                amenities: vec!["WiFi".to_owned()],
                ..listing(2, "Creek Inn", 3, 3.9, 85.0)
            },
            Listing {
                location: "Abu Dhabi".to_owned(),
                amenities: vec!["pool".to_owned()],
                ..listing(3, "Corniche Suites", 4, 4.5, 210.0)
            },
        ]
    }

    fn criteria() -> FilterCriteria {
        FilterCriteria::with_bounds(PriceBounds::new(0.0, 500.0))
    }

    fn ids(listings: &[Listing]) -> Vec<u64> {
        listings.iter().map(|listing| listing.id).collect()
    }

    #[rstest]
    fn default_criteria_keep_everything_in_source_order(listings: Vec<Listing>) {
        assert_eq!(ids(&criteria().apply(&listings)), vec![1, 2, 3]);
    }

    #[rstest]
    fn search_matches_name_or_location_case_insensitively(listings: Vec<Listing>) {
        let mut by_name = criteria();
        by_name.search = "creek".to_owned();
        let mut by_location = criteria();
        by_location.search = "ABU".to_owned();

        assert_eq!(ids(&by_name.apply(&listings)), vec![2]);
        assert_eq!(ids(&by_location.apply(&listings)), vec![3]);
    }

    #[rstest]
    fn price_range_is_inclusive(listings: Vec<Listing>) {
        let mut filter = criteria();
        filter.price_range = PriceBounds::new(0.0, 500.0).clamp_range(85.0, 210.0);

        assert_eq!(ids(&filter.apply(&listings)), vec![2, 3]);
    }

    #[rstest]
    fn stars_and_rating_narrow_results(listings: Vec<Listing>) {
        let mut filter = criteria();
        filter.stars.extend([4, 5]);
        filter.guest_rating = 4.6;

        assert_eq!(ids(&filter.apply(&listings)), vec![1]);
    }

    #[rstest]
    fn amenities_require_every_selected_label(listings: Vec<Listing>) {
        let mut filter = criteria();
        filter.amenities.insert("Pool".to_owned());
        assert_eq!(ids(&filter.apply(&listings)), vec![1, 3]);

        filter.amenities.insert("WiFi".to_owned());
        assert_eq!(ids(&filter.apply(&listings)), vec![1]);
    }

    #[rstest]
    #[case::top_rated(QUICK_FILTER_TOP_RATED, vec![1, 3])]
    #[case::luxury(QUICK_FILTER_LUXURY, vec![1])]
    #[case::tag("free cancellation", vec![1])]
    #[case::unknown_tag("Pet Friendly", vec![])]
    fn quick_filters_apply_presets_or_tags(
        listings: Vec<Listing>,
        #[case] tag: &str,
        #[case] expected: Vec<u64>,
    ) {
        let mut filter = criteria();
        filter.quick_filter = Some(tag.to_owned());

        assert_eq!(ids(&filter.apply(&listings)), expected);
    }

    #[rstest]
    #[case::low_to_high(SortKey::LowToHigh, vec![2, 3, 1])]
    #[case::high_to_low(SortKey::HighToLow, vec![1, 3, 2])]
    #[case::rating(SortKey::Rating, vec![1, 3, 2])]
    #[case::popularity(SortKey::Popularity, vec![1, 2, 3])]
    fn sort_orders_results(
        mut listings: Vec<Listing>,
        #[case] key: SortKey,
        #[case] expected: Vec<u64>,
    ) {
        sort_listings(&mut listings, key);
        assert_eq!(ids(&listings), expected);
    }
}
