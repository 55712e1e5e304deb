//! Single source of truth for the listing page's filter criteria and
//! result set.
//!
//! The store is a synchronous state machine. Fetching is split into two
//! halves so that the store never awaits while it is borrowed:
//!
//! 1. [`FilterStore::apply_filter`] snapshots the criteria, issues a new
//!    [`RequestToken`] and marks the result set as loading.
//! 2. The caller runs the returned [`PendingFetch`] against a gateway and
//!    hands the outcome to [`FilterStore::complete_fetch`].
//!
//! Only the response for the most recently issued token may replace the
//! result set. Earlier responses that resolve late are dropped, so two
//! overlapping fetches always settle on the newest criteria.

use tracing::{debug, warn};

use crate::error::WayfarerError;
use crate::filter::{
    FilterCriteria, PriceBounds, PriceRange, SELECTABLE_STARS, SortKey, clamp_guest_rating,
};
use crate::models::{Listing, ListingPage};

/// Monotonically increasing identifier attached to each fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Returns the raw token value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// A fetch issued by the store and awaiting a gateway response.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingFetch {
    /// Token that must accompany the response.
    pub token: RequestToken,
    /// Snapshot of the criteria at the time the fetch was issued.
    pub criteria: FilterCriteria,
}

/// How a completed fetch affected the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response replaced the result set.
    Applied,
    /// The response replaced the result set with zero listings.
    Empty,
    /// The response belonged to a superseded request and was discarded.
    Stale,
    /// The latest request failed; the previous result set was kept.
    Failed,
}

/// Listings currently displayed, paired with their loading state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultSet {
    /// Displayed listings.
    pub items: Vec<Listing>,
    /// Total matches reported by the service.
    pub total: u64,
    /// Whether the latest issued fetch is still outstanding.
    pub is_loading: bool,
}

impl ResultSet {
    /// Returns true when a completed fetch produced no listings.
    #[must_use]
    pub const fn is_empty_result(&self) -> bool {
        !self.is_loading && self.items.is_empty()
    }
}

/// Owns the filter criteria and result set for one listing session.
#[derive(Debug, Clone)]
pub struct FilterStore {
    criteria: FilterCriteria,
    bounds: PriceBounds,
    results: ResultSet,
    latest_token: u64,
    last_error: Option<WayfarerError>,
    validation: Vec<WayfarerError>,
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new(PriceBounds::default())
    }
}

impl FilterStore {
    /// Creates a store with default criteria spanning `bounds`.
    #[must_use]
    pub fn new(bounds: PriceBounds) -> Self {
        Self {
            criteria: FilterCriteria::with_bounds(bounds),
            bounds,
            results: ResultSet::default(),
            latest_token: 0,
            last_error: None,
            validation: Vec::new(),
        }
    }

    /// Creates a store whose price bounds are derived from `listings`.
    #[must_use]
    pub fn for_dataset(listings: &[Listing]) -> Self {
        Self::new(PriceBounds::from_listings(listings))
    }

    /// Current criteria.
    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Current result set.
    #[must_use]
    pub const fn results(&self) -> &ResultSet {
        &self.results
    }

    /// Global price bounds used for clamping.
    #[must_use]
    pub const fn price_bounds(&self) -> PriceBounds {
        self.bounds
    }

    /// Error from the most recent failed fetch, cleared on the next
    /// accepted response.
    #[must_use]
    pub const fn last_error(&self) -> Option<&WayfarerError> {
        self.last_error.as_ref()
    }

    /// Field-level messages for inputs that were corrected locally.
    #[must_use]
    pub fn validation_messages(&self) -> &[WayfarerError] {
        &self.validation
    }

    /// Latest token issued, if any fetch has been started.
    #[must_use]
    pub const fn latest_token(&self) -> Option<RequestToken> {
        if self.latest_token == 0 {
            None
        } else {
            Some(RequestToken(self.latest_token))
        }
    }

    /// Replaces the search text without fetching.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.criteria.search = text.into();
    }

    /// Stores a price range, correcting it locally instead of rejecting it.
    ///
    /// Inverted pairs are swapped and both ends are clamped into the global
    /// bounds, so the stored range always satisfies
    /// `bounds.min <= min <= max <= bounds.max`.
    pub fn set_price_range(&mut self, min: f64, max: f64) -> PriceRange {
        let message = (min > max).then(|| {
            format!("minimum {min} exceeded maximum {max}; the values were swapped")
        });
        self.note_validation("price_range", message);
        self.criteria.price_range = self.bounds.clamp_range(min, max);
        self.criteria.price_range
    }

    /// Toggles a star classification; returns whether it is now selected.
    ///
    /// Values outside the selectable set are ignored and reported through
    /// [`Self::validation_messages`].
    pub fn toggle_star(&mut self, stars: u8) -> bool {
        if !SELECTABLE_STARS.contains(&stars) {
            self.note_validation(
                "stars",
                Some(format!("{stars}-star filter is not available")),
            );
            return false;
        }
        self.note_validation("stars", None);
        if self.criteria.stars.remove(&stars) {
            false
        } else {
            self.criteria.stars.insert(stars)
        }
    }

    /// Overwrites the guest-rating threshold, clamped to `[0, 5]`.
    pub fn set_guest_rating(&mut self, rating: f64) -> f64 {
        self.criteria.guest_rating = clamp_guest_rating(rating);
        self.criteria.guest_rating
    }

    /// Toggles an amenity label; returns whether it is now selected.
    pub fn toggle_amenity(&mut self, label: &str) -> bool {
        if self.criteria.amenities.remove(label) {
            false
        } else {
            self.criteria.amenities.insert(label.to_owned())
        }
    }

    /// Activates a quick-filter chip. Reselecting the active chip keeps it
    /// active.
    pub fn set_quick_filter(&mut self, label: impl Into<String>) {
        self.criteria.quick_filter = Some(label.into());
    }

    /// Clears the active quick-filter chip.
    pub fn clear_quick_filter(&mut self) {
        self.criteria.quick_filter = None;
    }

    /// Overwrites the sort key without fetching.
    pub const fn set_sort(&mut self, key: SortKey) {
        self.criteria.sort = key;
    }

    /// Replaces the global price bounds and re-clamps the stored range.
    pub fn set_price_bounds(&mut self, bounds: PriceBounds) {
        self.bounds = bounds;
        let PriceRange { min, max } = self.criteria.price_range;
        self.criteria.price_range = bounds.clamp_range(min, max);
    }

    /// Snapshots the criteria and issues a new fetch.
    pub fn apply_filter(&mut self) -> PendingFetch {
        self.latest_token = self.latest_token.saturating_add(1);
        self.results.is_loading = true;
        let token = RequestToken(self.latest_token);
        debug!(token = token.value(), "issuing listing fetch");
        PendingFetch {
            token,
            criteria: self.criteria.clone(),
        }
    }

    /// Restores the default criteria and issues a new fetch.
    pub fn reset_filters(&mut self) -> PendingFetch {
        self.criteria = FilterCriteria::with_bounds(self.bounds);
        self.validation.clear();
        self.apply_filter()
    }

    /// Resolves a fetch previously issued by [`Self::apply_filter`].
    pub fn complete_fetch(
        &mut self,
        token: RequestToken,
        result: Result<ListingPage, WayfarerError>,
    ) -> FetchOutcome {
        if token.value() != self.latest_token {
            debug!(
                token = token.value(),
                latest = self.latest_token,
                "dropping stale listing response"
            );
            return FetchOutcome::Stale;
        }

        self.results.is_loading = false;
        match result {
            Ok(page) => {
                let outcome = if page.items.is_empty() {
                    FetchOutcome::Empty
                } else {
                    FetchOutcome::Applied
                };
                self.results = ResultSet {
                    items: page.items,
                    total: page.total,
                    is_loading: false,
                };
                self.last_error = None;
                outcome
            }
            Err(error) => {
                warn!(token = token.value(), %error, "listing fetch failed; keeping previous results");
                self.last_error = Some(error);
                FetchOutcome::Failed
            }
        }
    }

    fn note_validation(&mut self, field: &'static str, message: Option<String>) {
        self.validation
            .retain(|error| !matches!(error, WayfarerError::Validation { field: f, .. } if *f == field));
        if let Some(text) = message {
            self.validation.push(WayfarerError::validation(field, text));
        }
    }
}
