//! Place-name resolution with caching and local fallback.

use std::future::Future;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::{debug, warn};

use crate::domain::{Coordinate, GeocodeSource};

use super::client::GoogleGeocodeClient;
use super::error::GeocodeError;
use super::fallback::resolve_locally;

/// A resolved place and how it was resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved {
    pub coordinate: Coordinate,
    pub source: GeocodeSource,
}

/// Trait for external geocoding lookups.
///
/// This abstraction allows the resolver to be tested without network access.
pub trait GeocodeProvider {
    /// Resolve a free-text place to a coordinate.
    fn lookup(&self, place: &str) -> impl Future<Output = Result<Coordinate, GeocodeError>> + Send;
}

impl GeocodeProvider for GoogleGeocodeClient {
    async fn lookup(&self, place: &str) -> Result<Coordinate, GeocodeError> {
        self.geocode(place).await
    }
}

/// Configuration for the lookup cache.
#[derive(Debug, Clone)]
pub struct GeocodeCacheConfig {
    /// TTL for cached lookups.
    pub ttl: Duration,

    /// Maximum number of cached places.
    pub max_capacity: u64,
}

impl Default for GeocodeCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60 * 60),
            max_capacity: 1000,
        }
    }
}

/// Resolves place names, preferring the external service when configured.
///
/// Never fails: any service problem is logged and answered from the
/// built-in table (see [`resolve_locally`]). Only successful service lookups
/// are cached, so a service that comes back is used again straight away.
pub struct Geocoder<P = GoogleGeocodeClient> {
    provider: Option<P>,
    cache: MokaCache<String, Coordinate>,
}

impl<P: GeocodeProvider> Geocoder<P> {
    /// Create a resolver. `None` means no credential is configured.
    pub fn new(provider: Option<P>, cache_config: &GeocodeCacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(cache_config.ttl)
            .max_capacity(cache_config.max_capacity)
            .build();

        Self { provider, cache }
    }

    /// Create a resolver that only uses the built-in table.
    pub fn offline() -> Self {
        Self::new(None, &GeocodeCacheConfig::default())
    }

    /// Whether an external service is configured.
    pub fn has_service(&self) -> bool {
        self.provider.is_some()
    }

    /// Resolve a free-text place to a coordinate.
    pub async fn resolve(&self, place: &str) -> Resolved {
        let Some(provider) = &self.provider else {
            debug!(place, "no geocoding credential configured, using lookup table");
            return resolve_locally(place);
        };

        let key = cache_key(place);
        if let Some(coordinate) = self.cache.get(&key).await {
            return Resolved {
                coordinate,
                source: GeocodeSource::Service,
            };
        }

        match provider.lookup(place).await {
            Ok(coordinate) => {
                debug!(place, %coordinate, "geocoded via service");
                self.cache.insert(key, coordinate).await;
                Resolved {
                    coordinate,
                    source: GeocodeSource::Service,
                }
            }
            Err(e) => {
                let resolved = resolve_locally(place);
                warn!(
                    place,
                    error = %e,
                    source = %resolved.source,
                    "geocoding service failed, using fallback"
                );
                resolved
            }
        }
    }
}

/// Cache key: trimmed, lowercase place text.
fn cache_key(place: &str) -> String {
    place.trim().to_lowercase()
}
