//! Place-name geocoding.
//!
//! Resolves free text like "Jamshedpur" to a coordinate. When a Google Maps
//! API key is configured the Geocoding API is tried first; without a key, or
//! when the service fails, a small built-in table of Jharkhand places is
//! used, and Ranchi is the answer of last resort. Resolution never fails,
//! but every answer says how it was obtained.

mod client;
mod error;
mod fallback;
mod resolver;

pub use client::{GeocodeConfig, GeocodeResponse, GoogleGeocodeClient};
pub use error::GeocodeError;
pub use fallback::{DEFAULT_LOCATION, lookup_known_place, resolve_locally};
pub use resolver::{GeocodeCacheConfig, GeocodeProvider, Geocoder, Resolved};
