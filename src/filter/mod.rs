//! Filter criteria and their client-side evaluation.

mod criteria;
mod evaluate;

pub use criteria::{
    FilterCriteria, MAX_GUEST_RATING, PriceBounds, PriceRange, SELECTABLE_STARS, SortKey,
    clamp_guest_rating,
};
pub use evaluate::{
    QUICK_FILTER_LUXURY, QUICK_FILTER_TOP_RATED, TOP_RATED_THRESHOLD, quick_filter_matches,
    sort_listings,
};
