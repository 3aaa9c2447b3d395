//! Domain types for the tourism route planner.
//!
//! Coordinates, catalog entries and route summaries. These are plain value
//! types; the planner reads them and returns annotated copies.

mod coordinate;
mod poi;
mod route;

pub use coordinate::{Coordinate, InvalidCoordinate};
pub use poi::{AnnotatedPointOfInterest, Hotel, Located, PointOfInterest};
pub use route::{GeocodeSource, RouteEndpoint, RouteSummary};
