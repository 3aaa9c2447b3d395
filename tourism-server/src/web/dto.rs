//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{
    AnnotatedPointOfInterest, Coordinate, GeocodeSource, Hotel, PointOfInterest, RouteEndpoint,
    RouteSummary,
};
use crate::planner::{DayPlan, DedupMode};

/// Filters for listing attractions.
#[derive(Debug, Default, Deserialize)]
pub struct AttractionQuery {
    /// Only attractions in this city (case-insensitive)
    pub city: Option<String>,

    /// Only attractions carrying this interest tag
    pub interest: Option<String>,
}

/// Filters for listing hotels.
#[derive(Debug, Default, Deserialize)]
pub struct HotelQuery {
    pub city: Option<String>,
}

/// Attractions matching a query.
#[derive(Debug, Serialize)]
pub struct AttractionListResponse {
    pub attractions: Vec<PointOfInterest>,
    pub count: usize,
}

/// Hotels matching a query.
#[derive(Debug, Serialize)]
pub struct HotelListResponse {
    pub hotels: Vec<Hotel>,
    pub count: usize,
}

/// Request to calculate a route and the attractions along it.
#[derive(Debug, Deserialize)]
pub struct CalculateRouteRequest {
    /// Coordinate or place name
    pub origin: Option<RouteEndpoint>,

    /// Coordinate or place name
    pub destination: Option<RouteEndpoint>,

    /// Interest tags; absent, null or empty means no filtering
    #[serde(default)]
    pub interests: Option<Vec<String>>,

    /// Search radius around the route (km), defaults to the configured radius
    pub buffer_km: Option<f64>,

    /// Overrides the configured deduplication mode
    pub dedup: Option<DedupMode>,
}

/// A route plus the attractions near it.
#[derive(Debug, Serialize)]
pub struct CalculateRouteResponse {
    pub route: RouteSummary,
    pub nearby_attractions: Vec<AnnotatedPointOfInterest>,
    pub suggestions_count: usize,
}

/// The attractions an itinerary request refers to.
///
/// Either catalog identifiers or full attraction records; identifiers win
/// when both are given.
#[derive(Debug, Default, Deserialize)]
pub struct AttractionSelection {
    #[serde(default)]
    pub attraction_ids: Vec<String>,

    #[serde(default)]
    pub attractions: Vec<PointOfInterest>,
}

/// Request to order attractions into a visiting sequence.
#[derive(Debug, Deserialize)]
pub struct OrderRequest {
    #[serde(flatten)]
    pub selection: AttractionSelection,

    /// Where the trip starts: coordinate or place name
    pub start_location: Option<RouteEndpoint>,
}

/// Attractions in visiting order.
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub start: Coordinate,
    pub start_source: GeocodeSource,
    pub attractions: Vec<PointOfInterest>,

    /// Distance from the start through every stop in order (km, 2 decimals)
    pub total_distance_km: f64,
}

/// Request to group attractions into days.
#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    #[serde(flatten)]
    pub selection: AttractionSelection,
}

/// Attractions grouped one city per day.
#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    pub optimized_days: Vec<DayPlan>,
    pub total_days: usize,
    pub total_attractions: usize,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
