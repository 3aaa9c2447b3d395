//! Geocoding error types.

/// Errors from the external geocoding service.
///
/// These never reach callers of [`Geocoder::resolve`](super::Geocoder::resolve);
/// the resolver logs them and falls back to the local table.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned a non-success HTTP status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Service answered, but with a status other than `OK`
    #[error("geocoding failed: {status}{}", .message.as_deref().map(|m| format!(" ({m})")).unwrap_or_default())]
    Status {
        status: String,
        message: Option<String>,
    },

    /// Service answered `OK` with an empty result list
    #[error("geocoding returned no results")]
    NoResults,

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
