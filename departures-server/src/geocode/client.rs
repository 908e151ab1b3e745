//! Geocoder HTTP client.
//!
//! Issues a single request per lookup and reads the first entry of the
//! provider's match list. Zero matches is `AddressNotFound`; there is no
//! fallback address anywhere in this path.

use std::time::Duration;

use crate::domain::Coordinate;

use super::error::GeocodeError;
use super::types::GeocodeResponse;

/// Default base URL for the geocoding provider.
const DEFAULT_BASE_URL: &str = "https://geocoding.geo.census.gov";

/// Benchmark identifier the provider expects for current address data.
const DEFAULT_BENCHMARK: &str = "Public_AR_Current";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the geocoder client.
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    /// Base URL for the API (defaults to the production geocoder)
    pub base_url: String,
    /// Benchmark identifier sent with each query
    pub benchmark: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            benchmark: DEFAULT_BENCHMARK.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GeocoderConfig {
    /// Create a config with the default provider settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom base URL (for testing or a different deployment).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the benchmark identifier.
    pub fn with_benchmark(mut self, benchmark: impl Into<String>) -> Self {
        self.benchmark = benchmark.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Geocoder API client.
#[derive(Debug, Clone)]
pub struct GeocoderClient {
    http: reqwest::Client,
    base_url: String,
    benchmark: String,
}

impl GeocoderClient {
    /// Create a new geocoder client with the given configuration.
    pub fn new(config: GeocoderConfig) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            benchmark: config.benchmark,
        })
    }

    /// Resolve a free-text address to a coordinate pair.
    ///
    /// Takes the first (best) match from the provider's list. Returns
    /// `AddressNotFound` when the list is empty or absent, which callers
    /// must surface as a client-facing "not found" condition.
    pub async fn resolve_address(&self, address: &str) -> Result<Coordinate, GeocodeError> {
        let url = format!("{}/geocoder/locations/onelineaddress", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("address", address),
                ("format", "json"),
                ("benchmark", self.benchmark.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: GeocodeResponse =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        let first = parsed
            .result
            .address_matches
            .into_iter()
            .next()
            .ok_or(GeocodeError::AddressNotFound)?;

        tracing::debug!(
            matched = first.matched_address.as_deref().unwrap_or(""),
            x = first.coordinates.x,
            y = first.coordinates.y,
            "geocoded address"
        );

        Ok(Coordinate::from_xy(first.coordinates.x, first.coordinates.y))
    }
}
