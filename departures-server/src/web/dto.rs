//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

/// Query parameters for the departures endpoint.
#[derive(Debug, Deserialize)]
pub struct DepartureQuery {
    /// Street address to look up. Required in practice; requests without
    /// one are rejected rather than falling back to a default location.
    pub address: Option<String>,

    /// Route to filter to. Falls back to the configured default route.
    pub route: Option<String>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
