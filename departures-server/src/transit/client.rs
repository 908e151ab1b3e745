//! Predictions HTTP client.

use std::time::Duration;

use crate::domain::Coordinate;

use super::error::PredictionError;
use super::types::{PredictionDocument, PredictionResource};

/// Default base URL for the predictions provider.
const DEFAULT_BASE_URL: &str = "https://api-v3.mbta.com";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Related resources requested with every predictions query, so the
/// extractor has everything it needs without further calls.
const INCLUDED_RESOURCES: &str = "stop,route,trip,schedule";

/// Configuration for the predictions client.
#[derive(Debug, Clone)]
pub struct PredictionConfig {
    /// Base URL for the API (defaults to the production provider)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl PredictionConfig {
    /// Create a config with the default provider settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom base URL (for testing or a different deployment).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Predictions API client.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
    base_url: String,
}

impl PredictionClient {
    /// Create a new predictions client with the given configuration.
    pub fn new(config: PredictionConfig) -> Result<Self, PredictionError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch every prediction near a coordinate.
    ///
    /// The provider filters by proximity server-side; the result covers all
    /// routes and stops in the area and is returned unfiltered. Transport
    /// and parse failures propagate; there is no local recovery.
    pub async fn fetch_predictions(
        &self,
        coord: &Coordinate,
    ) -> Result<Vec<PredictionResource>, PredictionError> {
        let url = format!("{}/predictions", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("filter[latitude]", coord.latitude()),
                ("filter[longitude]", coord.longitude()),
                ("include", INCLUDED_RESOURCES),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PredictionError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let document: PredictionDocument =
            serde_json::from_str(&body).map_err(|e| PredictionError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        tracing::debug!(count = document.data.len(), "fetched predictions");

        Ok(document.data)
    }
}
