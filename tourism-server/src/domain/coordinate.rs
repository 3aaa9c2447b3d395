//! Geographic coordinate type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a coordinate is outside the valid lat/lng ranges.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid coordinate ({lat}, {lng}): {reason}")]
pub struct InvalidCoordinate {
    lat: f64,
    lng: f64,
    reason: &'static str,
}

/// A latitude/longitude pair in degrees.
///
/// Serializes as `{"lat": .., "lng": ..}`, the shape used by the attraction
/// catalog and the geocoding service.
///
/// [`Coordinate::new`] does not validate: the planner trusts numeric input and
/// out-of-range values simply produce meaningless distances. Request handlers
/// that accept coordinates from users go through [`Coordinate::checked`].
///
/// # Examples
///
/// ```
/// use tourism_server::domain::Coordinate;
///
/// let ranchi = Coordinate::checked(23.3441, 85.3096).unwrap();
/// assert_eq!(ranchi.lat, 23.3441);
///
/// assert!(Coordinate::checked(91.0, 0.0).is_err());
/// assert!(Coordinate::checked(0.0, f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, -90 to 90.
    pub lat: f64,
    /// Longitude in degrees, -180 to 180.
    pub lng: f64,
}

impl Coordinate {
    /// Create a coordinate without range checks.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Create a coordinate, rejecting NaN and out-of-range values.
    pub fn checked(lat: f64, lng: f64) -> Result<Self, InvalidCoordinate> {
        let coord = Self { lat, lng };
        coord.validate()?;
        Ok(coord)
    }

    /// Check that both components are finite and within range.
    pub fn validate(&self) -> Result<(), InvalidCoordinate> {
        let fail = |reason| InvalidCoordinate {
            lat: self.lat,
            lng: self.lng,
            reason,
        };

        if !self.lat.is_finite() || !self.lng.is_finite() {
            return Err(fail("components must be finite numbers"));
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(fail("latitude must be between -90 and 90"));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(fail("longitude must be between -180 and 180"));
        }
        Ok(())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_ranges() {
        assert!(Coordinate::checked(0.0, 0.0).is_ok());
        assert!(Coordinate::checked(90.0, 180.0).is_ok());
        assert!(Coordinate::checked(-90.0, -180.0).is_ok());
        assert!(Coordinate::checked(23.3441, 85.3096).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Coordinate::checked(90.0001, 0.0).is_err());
        assert!(Coordinate::checked(-91.0, 0.0).is_err());
        assert!(Coordinate::checked(0.0, 180.5).is_err());
        assert!(Coordinate::checked(0.0, -181.0).is_err());
    }

    #[test]
    fn rejects_non_finite() {
        assert!(Coordinate::checked(f64::NAN, 0.0).is_err());
        assert!(Coordinate::checked(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn error_message_names_the_problem() {
        let err = Coordinate::checked(100.0, 10.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid coordinate (100, 10): latitude must be between -90 and 90"
        );
    }

    #[test]
    fn json_shape() {
        let coord: Coordinate = serde_json::from_str(r#"{"lat": 23.4, "lng": 85.5}"#).unwrap();
        assert_eq!(coord, Coordinate::new(23.4, 85.5));

        let json = serde_json::to_value(coord).unwrap();
        assert_eq!(json, serde_json::json!({"lat": 23.4, "lng": 85.5}));
    }

    #[test]
    fn display() {
        assert_eq!(
            Coordinate::new(23.3441, 85.3096).to_string(),
            "(23.3441, 85.3096)"
        );
    }
}
