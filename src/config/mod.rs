//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.wayfarer.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `WAYFARER_API_URL`, `WAYFARER_SEARCH`, ...
//! 4. **Command-line arguments** – `--api-url`, `--search`/`-s`, ...
//!
//! # Configuration File
//!
//! ```toml
//! api_url = "https://listings.example.com/api"
//! destinations_url = "https://listings.example.com/api"
//! stars = "4,5"
//! amenities = "Pool,Spa"
//! sort = "low_to_high"
//! search_debounce_ms = 500
//! ```

use std::time::Duration;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::debounce::DebounceWindows;
use crate::error::WayfarerError;
use crate::filter::{PriceBounds, SortKey};
use crate::store::FilterStore;

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Run one listing search with the configured filters.
    Search,
    /// Look up destination suggestions for `suggest`.
    Suggest,
}

/// Where listings are fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingSource {
    /// Remote listing service rooted at this base URL.
    Http(String),
    /// Local JSON dataset evaluated client-side.
    File(Utf8PathBuf),
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// Boolean fields are not read from the environment because `ortho_config`
/// does not load boolean values from it.
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "WAYFARER",
    discovery(
        dotfile_name = ".wayfarer.toml",
        config_file_name = "wayfarer.toml",
        app_name = "wayfarer"
    )
)]
pub struct WayfarerConfig {
    /// Base URL of the listing service.
    #[ortho_config(cli_short = 'a')]
    pub api_url: Option<String>,

    /// Local JSON listing dataset, used instead of `api_url`.
    #[ortho_config(cli_short = 'f')]
    pub listings_file: Option<String>,

    /// Base URL of the destination suggestion service.
    ///
    /// The built-in popular destinations are used when unset.
    #[ortho_config()]
    pub destinations_url: Option<String>,

    /// Free-text search over listing names and locations.
    #[ortho_config(cli_short = 's')]
    pub search: Option<String>,

    /// Lower end of the price range.
    #[ortho_config()]
    pub min_price: Option<f64>,

    /// Upper end of the price range.
    #[ortho_config()]
    pub max_price: Option<f64>,

    /// Comma-separated star classes, e.g. `4,5`.
    #[ortho_config()]
    pub stars: Option<String>,

    /// Minimum guest rating between 0 and 5.
    #[ortho_config(cli_short = 'g')]
    pub guest_rating: Option<f64>,

    /// Comma-separated amenity labels, e.g. `Pool,Spa`.
    #[ortho_config()]
    pub amenities: Option<String>,

    /// Quick filter tag such as `Top Rated` or `Luxury`.
    #[ortho_config(cli_short = 'q')]
    pub quick_filter: Option<String>,

    /// Sort order: `popularity`, `low_to_high`, `high_to_low` or `rating`.
    #[ortho_config()]
    pub sort: Option<String>,

    /// Destination text to suggest completions for.
    ///
    /// Setting this switches the CLI into suggestion mode.
    #[ortho_config()]
    pub suggest: Option<String>,

    /// Quiet period before typed search text is applied, in milliseconds.
    #[ortho_config()]
    pub search_debounce_ms: u64,

    /// Quiet period before a dragged price range is applied, in milliseconds.
    #[ortho_config()]
    pub price_debounce_ms: u64,

    /// HTTP request timeout, in seconds.
    #[ortho_config()]
    pub request_timeout_secs: u64,

    /// Lowest selectable price when listings come from the HTTP service.
    #[ortho_config()]
    pub price_floor: f64,

    /// Highest selectable price when listings come from the HTTP service.
    #[ortho_config()]
    pub price_ceiling: f64,

    /// Writes telemetry events to stderr as JSON lines.
    #[ortho_config()]
    pub telemetry: bool,
}

const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;
const DEFAULT_PRICE_DEBOUNCE_MS: u64 = 250;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 20;
const DEFAULT_PRICE_FLOOR: f64 = 0.0;
const DEFAULT_PRICE_CEILING: f64 = 1000.0;

impl Default for WayfarerConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            listings_file: None,
            destinations_url: None,
            search: None,
            min_price: None,
            max_price: None,
            stars: None,
            guest_rating: None,
            amenities: None,
            quick_filter: None,
            sort: None,
            suggest: None,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            price_debounce_ms: DEFAULT_PRICE_DEBOUNCE_MS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            price_floor: DEFAULT_PRICE_FLOOR,
            price_ceiling: DEFAULT_PRICE_CEILING,
            telemetry: false,
        }
    }
}

impl WayfarerConfig {
    /// Determines the operation mode based on provided configuration.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.suggest.is_some() {
            OperationMode::Suggest
        } else {
            OperationMode::Search
        }
    }

    /// Returns the configured listing source.
    ///
    /// # Errors
    ///
    /// Returns [`WayfarerError::Configuration`] unless exactly one of
    /// `api_url` and `listings_file` is set.
    pub fn listing_source(&self) -> Result<ListingSource, WayfarerError> {
        match (&self.api_url, &self.listings_file) {
            (Some(url), None) => Ok(ListingSource::Http(url.clone())),
            (None, Some(path)) => Ok(ListingSource::File(Utf8PathBuf::from(path))),
            (Some(_), Some(_)) => Err(WayfarerError::Configuration {
                message: "use either --api-url or --listings-file, not both".to_owned(),
            }),
            (None, None) => Err(WayfarerError::Configuration {
                message: "a listing source is required (use --api-url or --listings-file)"
                    .to_owned(),
            }),
        }
    }

    /// Parses the configured star classes.
    ///
    /// # Errors
    ///
    /// Returns [`WayfarerError::Validation`] for entries that are not
    /// integers in `0..=255`.
    pub fn parse_stars(&self) -> Result<Vec<u8>, WayfarerError> {
        split_list(self.stars.as_deref())
            .map(|entry| {
                entry.parse::<u8>().map_err(|_| {
                    WayfarerError::validation("stars", format!("'{entry}' is not a star class"))
                })
            })
            .collect()
    }

    /// Parses the configured amenity labels.
    #[must_use]
    pub fn parse_amenities(&self) -> Vec<String> {
        split_list(self.amenities.as_deref())
            .map(str::to_owned)
            .collect()
    }

    /// Parses the configured sort order, defaulting to popularity.
    ///
    /// # Errors
    ///
    /// Returns [`WayfarerError::Validation`] for unknown sort keys.
    pub fn sort_key(&self) -> Result<SortKey, WayfarerError> {
        self.sort
            .as_deref()
            .map_or(Ok(SortKey::default()), str::parse)
    }

    /// Slider bounds for listings served over HTTP.
    #[must_use]
    pub fn price_bounds(&self) -> PriceBounds {
        PriceBounds::new(self.price_floor, self.price_ceiling)
    }

    /// Debounce window for typed search text.
    #[must_use]
    pub const fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Debounce window for price slider drags.
    #[must_use]
    pub const fn price_debounce(&self) -> Duration {
        Duration::from_millis(self.price_debounce_ms)
    }

    /// Debounce windows for a listing session's inputs.
    #[must_use]
    pub const fn debounce_windows(&self) -> DebounceWindows {
        DebounceWindows {
            search: self.search_debounce(),
            price: self.price_debounce(),
        }
    }

    /// Timeout applied to each HTTP request.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validates configuration consistency.
    ///
    /// # Errors
    ///
    /// Returns [`WayfarerError::Configuration`] when a search has no single
    /// listing source, a debounce window or timeout is zero, or the price
    /// floor exceeds the ceiling. Returns [`WayfarerError::Validation`] when
    /// `stars` or `sort` do not parse.
    pub fn validate(&self) -> Result<(), WayfarerError> {
        if self.operation_mode() == OperationMode::Search {
            self.listing_source()?;
        }
        if self.search_debounce_ms == 0 || self.price_debounce_ms == 0 {
            return Err(WayfarerError::Configuration {
                message: "debounce windows must be greater than zero".to_owned(),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(WayfarerError::Configuration {
                message: "request_timeout_secs must be greater than zero".to_owned(),
            });
        }
        if !self.price_floor.is_finite()
            || !self.price_ceiling.is_finite()
            || self.price_floor > self.price_ceiling
        {
            return Err(WayfarerError::Configuration {
                message: format!(
                    "price_floor ({}) must not exceed price_ceiling ({})",
                    self.price_floor, self.price_ceiling
                ),
            });
        }
        self.parse_stars()?;
        self.sort_key()?;
        Ok(())
    }

    /// Writes the configured filters into `store`.
    ///
    /// Out-of-range prices are clamped and invalid star classes are recorded
    /// as validation messages by the store itself.
    ///
    /// # Errors
    ///
    /// Returns [`WayfarerError::Validation`] when `stars` or `sort` do not
    /// parse.
    pub fn apply_criteria(&self, store: &mut FilterStore) -> Result<(), WayfarerError> {
        if let Some(search) = &self.search {
            store.set_search(search.as_str());
        }
        if self.min_price.is_some() || self.max_price.is_some() {
            let bounds = store.price_bounds();
            store.set_price_range(
                self.min_price.unwrap_or(bounds.min()),
                self.max_price.unwrap_or(bounds.max()),
            );
        }
        for stars in self.parse_stars()? {
            if !store.criteria().stars.contains(&stars) {
                store.toggle_star(stars);
            }
        }
        if let Some(rating) = self.guest_rating {
            store.set_guest_rating(rating);
        }
        for amenity in self.parse_amenities() {
            if !store.criteria().amenities.contains(&amenity) {
                store.toggle_amenity(&amenity);
            }
        }
        if let Some(label) = &self.quick_filter {
            store.set_quick_filter(label.as_str());
        }
        store.set_sort(self.sort_key()?);
        Ok(())
    }
}

fn split_list(raw: Option<&str>) -> impl Iterator<Item = &str> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
}

#[cfg(test)]
mod tests;
