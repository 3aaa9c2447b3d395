//! Application state for the web layer.

use std::sync::Arc;

use crate::catalog::StaticCatalog;
use crate::geocode::Geocoder;
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Place-name geocoder, with its own result cache
    pub geocoder: Arc<Geocoder>,

    /// Attractions and hotels
    pub catalog: Arc<StaticCatalog>,

    /// Route planning configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(geocoder: Geocoder, catalog: StaticCatalog, config: PlannerConfig) -> Self {
        Self {
            geocoder: Arc::new(geocoder),
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }
}
