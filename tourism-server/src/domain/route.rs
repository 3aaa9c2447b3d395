//! Route endpoints and summaries.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Where a coordinate came from.
///
/// Geocoding never fails outward, so callers that care whether a place was
/// actually found (rather than guessed) inspect this instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeocodeSource {
    /// The caller supplied coordinates directly.
    Given,
    /// Resolved by the external geocoding service.
    Service,
    /// Matched against the built-in table of known places.
    LookupTable,
    /// Nothing matched; the fixed default location was used.
    Default,
}

impl GeocodeSource {
    /// Whether the coordinate is a guess rather than a real resolution.
    pub fn is_fallback(self) -> bool {
        matches!(self, GeocodeSource::LookupTable | GeocodeSource::Default)
    }
}

impl fmt::Display for GeocodeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GeocodeSource::Given => "given",
            GeocodeSource::Service => "service",
            GeocodeSource::LookupTable => "lookup_table",
            GeocodeSource::Default => "default",
        };
        f.write_str(s)
    }
}

/// One end of a route: either a coordinate or a place name to geocode.
///
/// In JSON this is either `{"lat": .., "lng": ..}` or a plain string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RouteEndpoint {
    Coordinate(Coordinate),
    Place(String),
}

impl From<Coordinate> for RouteEndpoint {
    fn from(c: Coordinate) -> Self {
        RouteEndpoint::Coordinate(c)
    }
}

impl From<&str> for RouteEndpoint {
    fn from(s: &str) -> Self {
        RouteEndpoint::Place(s.to_string())
    }
}

/// Summary of a straight-line route between two points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub origin: Coordinate,
    pub destination: Coordinate,

    /// Great-circle distance in km, rounded to 2 decimals.
    pub distance_km: f64,

    /// Rough duration at a fixed average speed, rounded to 1 decimal.
    pub estimated_duration_hours: f64,

    /// Interpolated points from origin to destination, both included.
    pub waypoints: Vec<Coordinate>,

    pub origin_source: GeocodeSource,
    pub destination_source: GeocodeSource,
}
