//! Destination autocomplete for the hotel search form.
//!
//! Partial input is matched against either remote suggestions or a fixed
//! list of popular destinations. The remote source is only queried once the
//! input reaches [`MIN_QUERY_CHARS`] characters, and the dropdown falls back
//! to the first few entries of its source list rather than showing nothing.

mod matching;
mod popular;
mod search;
mod state;

pub use matching::{FALLBACK_SUGGESTION_COUNT, match_destinations};
pub use popular::popular_destinations;
pub use search::DestinationSearch;
pub use state::{DestinationAutocomplete, LookupRequest, MIN_QUERY_CHARS};
