//! Token matching between a partial query and destination names.

use crate::models::Destination;

/// Number of unfiltered entries shown when nothing matches.
pub const FALLBACK_SUGGESTION_COUNT: usize = 3;

/// Returns the destinations matching `query`.
///
/// The query is split on whitespace. A destination matches when any query
/// token is a substring of, or contains, any token of its `city country`
/// string, compared case-insensitively. When nothing matches, the first
/// [`FALLBACK_SUGGESTION_COUNT`] candidates are returned unfiltered so the
/// dropdown is never empty while a source list exists.
#[must_use]
pub fn match_destinations<'a>(query: &str, candidates: &'a [Destination]) -> Vec<&'a Destination> {
    let query_tokens: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();

    let matches: Vec<&Destination> = candidates
        .iter()
        .filter(|destination| tokens_overlap(&query_tokens, destination))
        .collect();

    if matches.is_empty() {
        candidates.iter().take(FALLBACK_SUGGESTION_COUNT).collect()
    } else {
        matches
    }
}

fn tokens_overlap(query_tokens: &[String], destination: &Destination) -> bool {
    let haystack = format!("{} {}", destination.city, destination.country).to_lowercase();
    haystack.split_whitespace().any(|candidate| {
        query_tokens
            .iter()
            .any(|token| candidate.contains(token.as_str()) || token.contains(candidate))
    })
}
