//! Filter criteria for the hotel listing page.
//!
//! [`FilterCriteria`] is the full set of user-selected constraints. It is
//! owned by the [`FilterStore`](crate::store::FilterStore); widgets mutate it
//! only through the store so that concurrent field edits never overwrite
//! each other.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WayfarerError;
use crate::models::Listing;

/// Star classifications accepted by the star filter.
pub const SELECTABLE_STARS: [u8; 3] = [3, 4, 5];

/// Upper bound of the guest rating scale.
pub const MAX_GUEST_RATING: f64 = 5.0;

const DEFAULT_PRICE_FLOOR: f64 = 0.0;
const DEFAULT_PRICE_CEILING: f64 = 1000.0;

/// Sort order applied to the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Source order as ranked by the service.
    #[default]
    Popularity,
    /// Cheapest first.
    LowToHigh,
    /// Most expensive first.
    HighToLow,
    /// Best guest rating first.
    Rating,
}

impl SortKey {
    /// Returns the wire name used in query strings and configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Popularity => "popularity",
            Self::LowToHigh => "low_to_high",
            Self::HighToLow => "high_to_low",
            Self::Rating => "rating",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = WayfarerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "popularity" => Ok(Self::Popularity),
            "low_to_high" => Ok(Self::LowToHigh),
            "high_to_low" => Ok(Self::HighToLow),
            "rating" => Ok(Self::Rating),
            other => Err(WayfarerError::validation(
                "sort",
                format!(
                    "unknown sort key '{other}' (expected popularity, low_to_high, \
                     high_to_low or rating)"
                ),
            )),
        }
    }
}

/// Observed global price bounds of the dataset.
///
/// Always finite with `min <= max`, which keeps `f64::clamp` panic-free.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBounds {
    min: f64,
    max: f64,
}

impl Default for PriceBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_PRICE_FLOOR,
            max: DEFAULT_PRICE_CEILING,
        }
    }
}

impl PriceBounds {
    /// Creates bounds, swapping inverted ends and replacing non-finite
    /// values with the defaults.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let lower = if min.is_finite() {
            min
        } else {
            DEFAULT_PRICE_FLOOR
        };
        let upper = if max.is_finite() {
            max
        } else {
            DEFAULT_PRICE_CEILING
        };
        if lower > upper {
            Self {
                min: upper,
                max: lower,
            }
        } else {
            Self {
                min: lower,
                max: upper,
            }
        }
    }

    /// Derives bounds from the prices present in `listings`.
    ///
    /// Falls back to the default bounds when no listing carries a finite
    /// price.
    #[must_use]
    pub fn from_listings(listings: &[Listing]) -> Self {
        listings
            .iter()
            .map(|listing| listing.actual_price)
            .filter(|price| price.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, price| {
                Some(acc.map_or((price, price), |(lo, hi)| (lo.min(price), hi.max(price))))
            })
            .map_or_else(Self::default, |(lo, hi)| Self::new(lo, hi))
    }

    /// Lowest observed price.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Highest observed price.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Returns the full range spanned by these bounds.
    #[must_use]
    pub const fn full_range(&self) -> PriceRange {
        PriceRange {
            min: self.min,
            max: self.max,
        }
    }

    /// Normalises a user-submitted pair into a valid stored range.
    ///
    /// Non-finite ends fall back to the matching bound, inverted pairs are
    /// swapped, and both ends are clamped into the bounds.
    #[must_use]
    pub fn clamp_range(&self, min: f64, max: f64) -> PriceRange {
        let lower = if min.is_finite() { min } else { self.min };
        let upper = if max.is_finite() { max } else { self.max };
        let (lower, upper) = if lower > upper {
            (upper, lower)
        } else {
            (lower, upper)
        };
        PriceRange {
            min: lower.clamp(self.min, self.max),
            max: upper.clamp(self.min, self.max),
        }
    }
}

/// Inclusive price range currently selected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound.
    pub max: f64,
}

impl PriceRange {
    /// Returns true when `price` lies inside the range.
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// User-selected search constraints for the listing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free-text match against listing name or location.
    pub search: String,
    /// Selected price range.
    pub price_range: PriceRange,
    /// Selected star classifications; empty means no star filter.
    pub stars: BTreeSet<u8>,
    /// Minimum guest rating; `0.0` means no rating filter.
    pub guest_rating: f64,
    /// Required amenity labels.
    pub amenities: BTreeSet<String>,
    /// Active quick-filter chip, if any.
    pub quick_filter: Option<String>,
    /// Sort order.
    pub sort: SortKey,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::with_bounds(PriceBounds::default())
    }
}

impl FilterCriteria {
    /// Creates default criteria whose price range spans `bounds`.
    #[must_use]
    pub fn with_bounds(bounds: PriceBounds) -> Self {
        Self {
            search: String::new(),
            price_range: bounds.full_range(),
            stars: BTreeSet::new(),
            guest_rating: 0.0,
            amenities: BTreeSet::new(),
            quick_filter: None,
            sort: SortKey::default(),
        }
    }

    /// Serialises the criteria as query parameters for the listing API.
    ///
    /// Fields left at their "no filter" value are omitted; price and sort
    /// are always sent.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(("search", search.to_owned()));
        }
        pairs.push(("min_price", self.price_range.min.to_string()));
        pairs.push(("max_price", self.price_range.max.to_string()));
        if !self.stars.is_empty() {
            let stars: Vec<String> = self.stars.iter().map(ToString::to_string).collect();
            pairs.push(("stars", stars.join(",")));
        }
        if self.guest_rating > 0.0 {
            pairs.push(("guest_rating", self.guest_rating.to_string()));
        }
        if !self.amenities.is_empty() {
            let amenities: Vec<&str> = self.amenities.iter().map(String::as_str).collect();
            pairs.push(("amenities", amenities.join(",")));
        }
        if let Some(quick_filter) = &self.quick_filter {
            pairs.push(("quick_filter", quick_filter.clone()));
        }
        pairs.push(("sort", self.sort.as_str().to_owned()));
        pairs
    }
}

/// Clamps a guest-rating threshold into `[0, 5]`; NaN becomes `0`.
#[must_use]
pub fn clamp_guest_rating(rating: f64) -> f64 {
    if rating.is_nan() {
        0.0
    } else {
        rating.clamp(0.0, MAX_GUEST_RATING)
    }
}
