//! HTTP gateways for the listing and destination services.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::error::WayfarerError;
use crate::filter::FilterCriteria;
use crate::models::{Destination, ListingPage};

use super::error_mapping::{ensure_success, map_transport_error};
use super::{DestinationGateway, ListingGateway};

const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Connection settings shared by the HTTP gateways.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpGatewayConfig {
    /// Service root, e.g. `https://api.example.com/v1`.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl HttpGatewayConfig {
    /// Constructs configuration for `base_url` with the default timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Overrides the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }

    fn build_client(&self) -> Result<Client, WayfarerError> {
        Url::parse(&self.base_url).map_err(|error| WayfarerError::Configuration {
            message: format!("invalid service URL '{}': {error}", self.base_url),
        })?;
        Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|error| WayfarerError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })
    }
}

/// Listing gateway backed by `GET {base}/listings`.
#[derive(Debug, Clone)]
pub struct HttpListingGateway {
    config: HttpGatewayConfig,
    client: Client,
}

impl HttpListingGateway {
    /// Creates a gateway for the configured service.
    ///
    /// # Errors
    ///
    /// Returns [`WayfarerError::Configuration`] when the base URL does not
    /// parse or the HTTP client cannot be built.
    pub fn new(config: HttpGatewayConfig) -> Result<Self, WayfarerError> {
        let client = config.build_client()?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl ListingGateway for HttpListingGateway {
    async fn search_listings(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<ListingPage, WayfarerError> {
        let endpoint = self.config.endpoint("listings");
        let query = criteria.to_query_pairs();
        debug!(%endpoint, ?query, "requesting listings");

        let response = self
            .client
            .get(endpoint)
            .query(&query)
            .send()
            .await
            .map_err(|error| map_transport_error(&error))?;
        let response = ensure_success(response).await?;

        response
            .json::<ListingPage>()
            .await
            .map_err(|error| WayfarerError::Decode {
                message: format!("listing response: {error}"),
            })
    }
}

/// Destination gateway backed by `GET {base}/destinations?query=...`.
#[derive(Debug, Clone)]
pub struct HttpDestinationGateway {
    config: HttpGatewayConfig,
    client: Client,
}

impl HttpDestinationGateway {
    /// Creates a gateway for the configured service.
    ///
    /// # Errors
    ///
    /// Returns [`WayfarerError::Configuration`] when the base URL does not
    /// parse or the HTTP client cannot be built.
    pub fn new(config: HttpGatewayConfig) -> Result<Self, WayfarerError> {
        let client = config.build_client()?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl DestinationGateway for HttpDestinationGateway {
    async fn suggest_destinations(&self, query: &str) -> Result<Vec<Destination>, WayfarerError> {
        let endpoint = self.config.endpoint("destinations");
        debug!(%endpoint, query, "requesting destination suggestions");

        let response = self
            .client
            .get(endpoint)
            .query(&[("query", query)])
            .send()
            .await
            .map_err(|error| map_transport_error(&error))?;
        let response = ensure_success(response).await?;

        response
            .json::<Vec<Destination>>()
            .await
            .map_err(|error| WayfarerError::Decode {
                message: format!("destination response: {error}"),
            })
    }
}
