//! Built-in place table used when the geocoding service is unavailable.

use crate::domain::{Coordinate, GeocodeSource};

use super::resolver::Resolved;

/// Ranchi, the state capital. Used when nothing else matches.
pub const DEFAULT_LOCATION: Coordinate = Coordinate::new(23.3441, 85.3096);

/// Known places, checked in order. Keys are lowercase.
const KNOWN_PLACES: [(&str, Coordinate); 7] = [
    ("ranchi", Coordinate::new(23.3441, 85.3096)),
    ("jamshedpur", Coordinate::new(22.8046, 86.2029)),
    ("hazaribagh", Coordinate::new(23.9929, 85.3644)),
    ("sahibganj", Coordinate::new(25.0504, 87.8314)),
    ("dhanbad", Coordinate::new(23.7957, 86.4304)),
    ("kolkata", Coordinate::new(22.5726, 88.3639)),
    ("patna", Coordinate::new(25.5941, 85.1376)),
];

/// Find the first known place whose name appears anywhere in `place`,
/// ignoring case.
///
/// ```
/// use tourism_server::geocode::lookup_known_place;
///
/// assert!(lookup_known_place("Near Jamshedpur railway station").is_some());
/// assert!(lookup_known_place("Deoghar").is_none());
/// ```
pub fn lookup_known_place(place: &str) -> Option<Coordinate> {
    let place = place.to_lowercase();
    KNOWN_PLACES
        .iter()
        .find(|(name, _)| place.contains(name))
        .map(|(_, coord)| *coord)
}

/// Resolve without the network: table match, else the default location.
pub fn resolve_locally(place: &str) -> Resolved {
    match lookup_known_place(place) {
        Some(coordinate) => Resolved {
            coordinate,
            source: GeocodeSource::LookupTable,
        },
        None => Resolved {
            coordinate: DEFAULT_LOCATION,
            source: GeocodeSource::Default,
        },
    }
}
