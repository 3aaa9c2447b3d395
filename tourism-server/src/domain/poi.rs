//! Points of interest and lodging from the reference catalog.

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Anything with a fixed position on the map.
///
/// Lets the sequencer order plain catalog entries and annotated search
/// results alike.
pub trait Located {
    /// The position of this item.
    fn location(&self) -> Coordinate;
}

impl Located for Coordinate {
    fn location(&self) -> Coordinate {
        *self
    }
}

/// An attraction from the reference catalog.
///
/// Read-only reference data: the planner never mutates these, it only clones
/// and annotates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    /// Identifier, unique within the catalog (e.g. `ranchi_001`).
    pub id: String,

    /// Display name
    pub name: String,

    /// City the attraction belongs to
    pub city: String,

    pub coordinates: Coordinate,

    /// Category tag (waterfall, temple, zoo, ...)
    #[serde(rename = "type")]
    pub category: String,

    /// Interest tags used for filtering (e.g. "Adventure", "Culture")
    #[serde(default)]
    pub interest_tags: Vec<String>,

    #[serde(default)]
    pub description: String,

    /// Recommended visiting season
    #[serde(default)]
    pub best_time: String,

    /// Typical visit duration, free text
    #[serde(default)]
    pub duration: String,

    /// Image reference
    #[serde(default)]
    pub image: String,

    /// Group size, for guided tours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_size: Option<String>,

    /// Price, for guided tours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl PointOfInterest {
    /// Whether any of this attraction's tags appears in `interests`.
    ///
    /// Tag comparison is exact (case-sensitive), matching catalog spelling.
    pub fn matches_any_interest<S: AsRef<str>>(&self, interests: &[S]) -> bool {
        interests
            .iter()
            .any(|wanted| self.interest_tags.iter().any(|tag| tag == wanted.as_ref()))
    }

    /// Attach a distance from the route to a copy of this attraction.
    pub fn annotate(&self, distance_from_route: f64) -> AnnotatedPointOfInterest {
        AnnotatedPointOfInterest {
            point: self.clone(),
            distance_from_route,
        }
    }
}

impl Located for PointOfInterest {
    fn location(&self) -> Coordinate {
        self.coordinates
    }
}

/// An attraction found near a route, with its distance from the route in km.
///
/// Serializes flat: the catalog fields plus `distance_from_route`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedPointOfInterest {
    #[serde(flatten)]
    pub point: PointOfInterest,

    /// Kilometers, rounded to 2 decimals.
    pub distance_from_route: f64,
}

impl Located for AnnotatedPointOfInterest {
    fn location(&self) -> Coordinate {
        self.point.coordinates
    }
}

/// A lodging entry from the reference catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub city: String,
    pub coordinates: Coordinate,

    /// Number of rooms
    #[serde(default)]
    pub rooms: u32,

    /// Contact phone number
    #[serde(default)]
    pub contact: String,

    #[serde(default)]
    pub amenities: Vec<String>,

    /// Nightly price range, free text
    #[serde(default)]
    pub price_range: String,
}

impl Located for Hotel {
    fn location(&self) -> Coordinate {
        self.coordinates
    }
}
