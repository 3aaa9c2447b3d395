//! Web layer for the tourism route planner.
//!
//! Provides JSON endpoints for browsing the catalog, calculating routes with
//! nearby attractions, and ordering or grouping a chosen itinerary.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
