//! Great-circle distance using the haversine formula.
//!
//! See [Wikipedia](https://en.wikipedia.org/wiki/Haversine_formula) for
//! more.
//!
//! **Distances are in kilometers**.

use crate::domain::Coordinate;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance between two coordinates along the Earth's surface.
///
/// Total over all inputs: identical points give 0, and the result does not
/// depend on argument order. NaN components propagate to a NaN result.
///
/// ```
/// use tourism_server::domain::Coordinate;
/// use tourism_server::geo::distance;
///
/// let ranchi = Coordinate::new(23.3441, 85.3096);
/// assert_eq!(distance(ranchi, ranchi), 0.0);
/// ```
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can push near-antipodal points just past 1. Written as a
    // comparison so NaN still propagates.
    let h = if h > 1.0 { 1.0 } else { h };
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Round to a fixed number of decimal places, half away from zero.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
