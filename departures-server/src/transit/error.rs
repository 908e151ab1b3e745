//! Prediction client error types.

/// Errors from the predictions HTTP client (and the file-backed mock).
///
/// All variants are transport or upstream-data failures; none are
/// user-correctable and none are recovered locally.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
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

    /// Failed to read mock prediction data from disk
    #[error("failed to read prediction data: {message}")]
    Io { message: String },
}
