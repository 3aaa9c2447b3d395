//! Route planning around points of interest.
//!
//! This module answers: "I'm driving from A to B - what is worth stopping
//! for, and in what order?"
//!
//! A route is a straight line between the endpoints, sampled at a few
//! waypoints. Attractions within a radius of any waypoint are collected, and
//! a chosen set of stops is ordered with a greedy nearest-neighbour pass.
//! Every function here is pure apart from geocoding in [`build_route`].

mod config;
mod days;
mod nearby;
mod route;
mod sequence;

pub use config::PlannerConfig;
pub use days::{DayPlan, group_by_city};
pub use nearby::{DedupMode, find_nearby};
pub use route::{
    build_route, interpolate_waypoints, resolve_endpoint, route_between, total_distance,
};
pub use sequence::nearest_neighbor_order;
