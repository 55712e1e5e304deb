//! One-shot filtered listing search.

use std::io::{self, Write};
use std::sync::Arc;

use wayfarer::{
    FetchOutcome, FilterStore, HttpGatewayConfig, HttpListingGateway, InMemoryListingGateway,
    ListingGateway, ListingSession, ListingSource, PriceBounds, TelemetrySink, WayfarerConfig,
    WayfarerError,
};

use super::output::write_results;
use super::telemetry_sink;

/// Runs a listing search with the configured filters and prints the result.
///
/// # Errors
///
/// Returns [`WayfarerError::Configuration`] when no single listing source is
/// configured, [`WayfarerError::Validation`] for unparseable filters, and
/// the gateway's error when the fetch fails.
pub async fn run(config: &WayfarerConfig) -> Result<(), WayfarerError> {
    let (gateway, bounds) = open_gateway(config)?;
    let mut stdout = io::stdout().lock();
    search_with(config, gateway, bounds, telemetry_sink(config), &mut stdout).await
}

fn open_gateway(
    config: &WayfarerConfig,
) -> Result<(Arc<dyn ListingGateway>, PriceBounds), WayfarerError> {
    match config.listing_source()? {
        ListingSource::Http(base_url) => {
            let http = HttpGatewayConfig::new(base_url).with_timeout(config.request_timeout());
            let gateway = HttpListingGateway::new(http)?;
            Ok((Arc::new(gateway), config.price_bounds()))
        }
        ListingSource::File(path) => {
            let gateway = InMemoryListingGateway::from_json_file(&path)?;
            let bounds = gateway.price_bounds();
            Ok((Arc::new(gateway), bounds))
        }
    }
}

/// Applies the configured filters through a fresh session and writes the
/// outcome to `writer`.
pub async fn search_with<W: Write>(
    config: &WayfarerConfig,
    gateway: Arc<dyn ListingGateway>,
    bounds: PriceBounds,
    telemetry: Arc<dyn TelemetrySink>,
    writer: &mut W,
) -> Result<(), WayfarerError> {
    let mut initial = FilterStore::new(bounds);
    config.apply_criteria(&mut initial)?;
    let session = ListingSession::new(initial, gateway)
        .with_telemetry(telemetry)
        .with_debounce_windows(config.debounce_windows());

    if session.apply_filter().await == FetchOutcome::Failed {
        let error = session.update(|store| store.last_error().cloned());
        return Err(error.unwrap_or_else(|| WayfarerError::Network {
            message: "listing fetch failed".to_owned(),
        }));
    }

    let notes = session.update(|store| store.validation_messages().to_vec());
    write_results(writer, &session.criteria(), &session.results(), &notes)
}
