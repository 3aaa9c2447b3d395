//! Planner configuration.

use super::nearby::DedupMode;

/// Configuration parameters for route planning.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Number of straight segments a route is split into.
    /// A route has `waypoint_segments + 1` waypoints, both endpoints included.
    pub waypoint_segments: usize,

    /// Average travel speed used for duration estimates (km/h).
    pub average_speed_kmh: f64,

    /// Search radius around the route when the caller gives none (km).
    pub default_radius_km: f64,

    /// How repeated sightings of an attraction are handled in proximity search.
    pub dedup: DedupMode,

    /// Hours budgeted per attraction when grouping an itinerary into days.
    pub hours_per_attraction: u32,
}

impl PlannerConfig {
    /// Set the number of route segments.
    pub fn with_waypoint_segments(mut self, segments: usize) -> Self {
        self.waypoint_segments = segments;
        self
    }

    /// Set the average speed.
    pub fn with_average_speed(mut self, kmh: f64) -> Self {
        self.average_speed_kmh = kmh;
        self
    }

    /// Set the proximity deduplication mode.
    pub fn with_dedup(mut self, dedup: DedupMode) -> Self {
        self.dedup = dedup;
        self
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            waypoint_segments: 5,
            average_speed_kmh: 60.0,
            default_radius_km: 10.0,
            dedup: DedupMode::FirstMatch,
            hours_per_attraction: 2,
        }
    }
}
