//! Straight-line route building.
//!
//! A route is approximated by linear interpolation in degree space between
//! the two endpoints. That is a planar approximation, fine for trips within
//! the state but increasingly wrong over long distances or near the poles.

use futures::future::join;
use tracing::debug;

use crate::domain::{Coordinate, GeocodeSource, Located, RouteEndpoint, RouteSummary};
use crate::geo::{distance, round_to};
use crate::geocode::{GeocodeProvider, Geocoder, Resolved};

use super::config::PlannerConfig;

/// Evenly spaced points from `origin` to `destination`.
///
/// Returns `segments + 1` points. The first is exactly `origin` and the last
/// exactly `destination`. Zero segments is treated as one.
///
/// ```
/// use tourism_server::domain::Coordinate;
/// use tourism_server::planner::interpolate_waypoints;
///
/// let a = Coordinate::new(23.0, 85.0);
/// let b = Coordinate::new(24.0, 86.0);
/// let points = interpolate_waypoints(a, b, 4);
///
/// assert_eq!(points.len(), 5);
/// assert_eq!(points[2], Coordinate::new(23.5, 85.5));
/// ```
pub fn interpolate_waypoints(
    origin: Coordinate,
    destination: Coordinate,
    segments: usize,
) -> Vec<Coordinate> {
    let segments = segments.max(1);
    let d_lat = destination.lat - origin.lat;
    let d_lng = destination.lng - origin.lng;

    (0..=segments)
        .map(|i| {
            if i == 0 {
                origin
            } else if i == segments {
                // Set directly: origin + (destination - origin) need not
                // round-trip exactly in floating point.
                destination
            } else {
                let ratio = i as f64 / segments as f64;
                Coordinate::new(origin.lat + d_lat * ratio, origin.lng + d_lng * ratio)
            }
        })
        .collect()
}

/// Summarize the route between two known coordinates.
pub fn route_between(
    origin: Resolved,
    destination: Resolved,
    config: &PlannerConfig,
) -> RouteSummary {
    let km = distance(origin.coordinate, destination.coordinate);

    RouteSummary {
        origin: origin.coordinate,
        destination: destination.coordinate,
        distance_km: round_to(km, 2),
        estimated_duration_hours: round_to(km / config.average_speed_kmh, 1),
        waypoints: interpolate_waypoints(
            origin.coordinate,
            destination.coordinate,
            config.waypoint_segments,
        ),
        origin_source: origin.source,
        destination_source: destination.source,
    }
}

/// Build a route, geocoding any endpoint given as text.
///
/// Both endpoints are resolved concurrently. Never fails: geocoding always
/// produces a coordinate, and the summary records how each was obtained.
pub async fn build_route<P: GeocodeProvider>(
    geocoder: &Geocoder<P>,
    origin: &RouteEndpoint,
    destination: &RouteEndpoint,
    config: &PlannerConfig,
) -> RouteSummary {
    let (origin, destination) = join(
        resolve_endpoint(geocoder, origin),
        resolve_endpoint(geocoder, destination),
    )
    .await;

    let summary = route_between(origin, destination, config);
    debug!(
        origin = %summary.origin,
        destination = %summary.destination,
        distance_km = summary.distance_km,
        "route built"
    );
    summary
}

/// Resolve one endpoint, geocoding it if it is a place name.
pub async fn resolve_endpoint<P: GeocodeProvider>(
    geocoder: &Geocoder<P>,
    endpoint: &RouteEndpoint,
) -> Resolved {
    match endpoint {
        RouteEndpoint::Coordinate(coordinate) => Resolved {
            coordinate: *coordinate,
            source: GeocodeSource::Given,
        },
        RouteEndpoint::Place(place) => geocoder.resolve(place).await,
    }
}

/// Total distance when visiting `stops` in order, starting from `start` (km).
pub fn total_distance<T: Located>(start: Coordinate, stops: &[T]) -> f64 {
    let mut current = start;
    let mut total = 0.0;
    for stop in stops {
        let next = stop.location();
        total += distance(current, next);
        current = next;
    }
    total
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_coordinate() -> impl Strategy<Value = Coordinate> {
        (21.0f64..26.0, 83.0f64..88.5).prop_map(|(lat, lng)| Coordinate::new(lat, lng))
    }

    proptest! {
        #[test]
        fn endpoints_exact_and_length(
            origin in arb_coordinate(),
            destination in arb_coordinate(),
            segments in 1usize..50,
        ) {
            let points = interpolate_waypoints(origin, destination, segments);
            prop_assert_eq!(points.len(), segments + 1);
            prop_assert_eq!(points[0], origin);
            prop_assert_eq!(points[segments], destination);
        }

        #[test]
        fn waypoints_stay_in_bounding_box(
            origin in arb_coordinate(),
            destination in arb_coordinate(),
            segments in 1usize..20,
        ) {
            let (lat_lo, lat_hi) = (origin.lat.min(destination.lat), origin.lat.max(destination.lat));
            let (lng_lo, lng_hi) = (origin.lng.min(destination.lng), origin.lng.max(destination.lng));
            for p in interpolate_waypoints(origin, destination, segments) {
                prop_assert!(p.lat >= lat_lo - 1e-9 && p.lat <= lat_hi + 1e-9);
                prop_assert!(p.lng >= lng_lo - 1e-9 && p.lng <= lng_hi + 1e-9);
            }
        }
    }
}
