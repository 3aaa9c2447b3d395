//! Google Maps Geocoding API client.

use serde::Deserialize;

use crate::domain::Coordinate;

use super::error::GeocodeError;

/// Default base URL for the Geocoding API.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";

/// Path of the JSON geocoding endpoint, relative to the base URL.
const GEOCODE_PATH: &str = "/maps/api/geocode/json";

/// Geocoding lookups sit on the request path, so keep them short.
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Top-level geocoding response.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    /// `OK`, `ZERO_RESULTS`, `REQUEST_DENIED`, ...
    pub status: String,

    #[serde(default)]
    pub results: Vec<GeocodeResult>,

    #[serde(default)]
    pub error_message: Option<String>,
}

/// Minimal DTO for a result - we only need the location.
#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: Coordinate,
}

impl GeocodeResponse {
    /// Location of the first result, if the service reported success.
    pub fn first_location(self) -> Result<Coordinate, GeocodeError> {
        if self.status != "OK" {
            return Err(GeocodeError::Status {
                status: self.status,
                message: self.error_message,
            });
        }

        self.results
            .into_iter()
            .next()
            .map(|r| r.geometry.location)
            .ok_or(GeocodeError::NoResults)
    }
}

/// Configuration for the geocoding client.
#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    /// API key, sent as the `key` query parameter
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeocodeConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
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

/// Client for the Google Maps Geocoding API.
#[derive(Debug, Clone)]
pub struct GoogleGeocodeClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GoogleGeocodeClient {
    /// Create a new geocoding client.
    pub fn new(config: GeocodeConfig) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    /// Look up an address and return the first result's location.
    pub async fn geocode(&self, address: &str) -> Result<Coordinate, GeocodeError> {
        let url = format!("{}{}", self.base_url, GEOCODE_PATH);

        let response = self
            .http
            .get(&url)
            .query(&[("address", address), ("key", self.api_key.as_str())])
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
            })?;

        parsed.first_location()
    }
}
