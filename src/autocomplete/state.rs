//! Dropdown state for the destination search box.

use tracing::debug;

use crate::error::WayfarerError;
use crate::models::Destination;

use super::matching::match_destinations;
use super::popular::popular_destinations;

/// Minimum number of characters before the remote source is queried.
pub const MIN_QUERY_CHARS: usize = 3;

/// A remote lookup requested by [`DestinationAutocomplete::on_input`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    /// Token that must accompany the response.
    pub token: u64,
    /// Query text to send.
    pub query: String,
}

/// State of the destination search box and its suggestion dropdown.
#[derive(Debug, Clone)]
pub struct DestinationAutocomplete {
    input: String,
    open: bool,
    remote: Option<Vec<Destination>>,
    fallback: Vec<Destination>,
    selected: Option<Destination>,
    latest_token: u64,
}

impl Default for DestinationAutocomplete {
    fn default() -> Self {
        Self::new(popular_destinations())
    }
}

impl DestinationAutocomplete {
    /// Creates an empty search box with the given fallback list.
    #[must_use]
    pub const fn new(fallback: Vec<Destination>) -> Self {
        Self {
            input: String::new(),
            open: false,
            remote: None,
            fallback,
            selected: None,
            latest_token: 0,
        }
    }

    /// Current input text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether the dropdown is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Destination chosen from the dropdown, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<&Destination> {
        self.selected.as_ref()
    }

    /// Records new input text.
    ///
    /// Returns a lookup to run when the text reaches [`MIN_QUERY_CHARS`];
    /// shorter text closes the dropdown without querying. Either way any
    /// lookup still in flight is invalidated, and remote results for the
    /// previous text are discarded until the new lookup resolves.
    pub fn on_input(&mut self, text: impl Into<String>) -> Option<LookupRequest> {
        self.input = text.into();
        self.selected = None;
        self.remote = None;
        self.latest_token = self.latest_token.saturating_add(1);

        let query = self.input.trim();
        if query.chars().count() < MIN_QUERY_CHARS {
            self.open = false;
            return None;
        }

        self.open = true;
        Some(LookupRequest {
            token: self.latest_token,
            query: query.to_owned(),
        })
    }

    /// Resolves a lookup. Returns false if the response was stale.
    ///
    /// Empty or failed lookups fall back to the popular destinations.
    pub fn complete_lookup(
        &mut self,
        token: u64,
        result: Result<Vec<Destination>, WayfarerError>,
    ) -> bool {
        if token != self.latest_token {
            debug!(token, latest = self.latest_token, "dropping stale suggestions");
            return false;
        }

        self.remote = match result {
            Ok(destinations) if !destinations.is_empty() => Some(destinations),
            Ok(_) => None,
            Err(error) => {
                debug!(%error, "destination lookup failed; showing popular destinations");
                None
            }
        };
        true
    }

    /// Suggestions for the current input.
    #[must_use]
    pub fn suggestions(&self) -> Vec<Destination> {
        let source = self.remote.as_deref().unwrap_or(&self.fallback);
        match_destinations(&self.input, source)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Dropdown labels for the current suggestions.
    #[must_use]
    pub fn suggestion_labels(&self) -> Vec<String> {
        self.suggestions().iter().map(Destination::label).collect()
    }

    /// Opens the dropdown, e.g. when the input gains focus.
    pub const fn open(&mut self) {
        self.open = true;
    }

    /// Closes the dropdown without changing the input.
    pub const fn close(&mut self) {
        self.open = false;
    }

    /// Chooses a destination: closes the dropdown and shows its city.
    pub fn select(&mut self, destination: Destination) {
        self.input.clone_from(&destination.city);
        self.selected = Some(destination);
        self.open = false;
    }
}
