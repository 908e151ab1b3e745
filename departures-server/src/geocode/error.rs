//! Geocoder client error types.

/// Errors from the geocoder HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// The provider returned zero matches for the address.
    ///
    /// This is the one user-correctable failure in the pipeline and maps to
    /// a client-facing "not found" rather than a generic error.
    #[error("no matches for address")]
    AddressNotFound,

    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        /// Truncated response body, kept for debugging.
        body: Option<String>,
    },
}
