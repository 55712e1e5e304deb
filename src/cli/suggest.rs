//! Destination suggestion lookup.

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use wayfarer::{
    DestinationGateway, DestinationSearch, HttpDestinationGateway, HttpGatewayConfig,
    MIN_QUERY_CHARS, StaticDestinationGateway, WayfarerConfig, WayfarerError,
};

use super::output::{io_error, write_suggestions};

/// Looks up suggestions for the configured destination text.
///
/// Falls back to the built-in popular destinations when no destination
/// service is configured.
///
/// # Errors
///
/// Returns [`WayfarerError::Configuration`] when the destination URL is
/// invalid and [`WayfarerError::Io`] when output cannot be written.
pub async fn run(config: &WayfarerConfig) -> Result<(), WayfarerError> {
    let gateway: Arc<dyn DestinationGateway> = match &config.destinations_url {
        Some(url) => Arc::new(HttpDestinationGateway::new(
            HttpGatewayConfig::new(url.as_str()).with_timeout(config.request_timeout()),
        )?),
        None => Arc::new(StaticDestinationGateway::default()),
    };
    let query = config.suggest.as_deref().unwrap_or_default();
    let mut stdout = io::stdout().lock();
    suggest_with(query, gateway, config.search_debounce(), &mut stdout).await
}

/// Types `query` into a destination search box debounced by `window`,
/// waits for the lookup through `gateway` and writes the suggestions.
///
/// A failed lookup is not an error: the dropdown shows popular destinations
/// instead.
pub async fn suggest_with<W: Write>(
    query: &str,
    gateway: Arc<dyn DestinationGateway>,
    window: Duration,
    writer: &mut W,
) -> Result<(), WayfarerError> {
    let search = DestinationSearch::new(gateway, window);
    search.type_text(query);
    if !search.is_open() {
        return writeln!(
            writer,
            "Type at least {MIN_QUERY_CHARS} characters to search destinations."
        )
        .map_err(|e| io_error(&e));
    }

    search.settled().await;
    write_suggestions(writer, query, &search.suggestion_labels())
}
