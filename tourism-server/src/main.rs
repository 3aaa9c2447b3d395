use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use tourism_server::catalog::StaticCatalog;
use tourism_server::geocode::{GeocodeCacheConfig, GeocodeConfig, Geocoder, GoogleGeocodeClient};
use tourism_server::planner::PlannerConfig;
use tourism_server::web::{AppState, create_router};

/// Listen address when `TOURISM_BIND_ADDR` is unset.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tourism_server=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

/// Non-empty value of an environment variable.
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[tokio::main]
async fn main() {
    init_logging();

    // Geocoding service is optional; without a key only the local table is used
    let client = match env_var("GOOGLE_MAPS_API_KEY") {
        Some(key) => {
            let mut config = GeocodeConfig::new(key);
            if let Some(url) = env_var("GEOCODE_BASE_URL") {
                config = config.with_base_url(url);
            }
            Some(GoogleGeocodeClient::new(config).expect("Failed to create geocoding client"))
        }
        None => None,
    };
    let geocoder = Geocoder::new(client, &GeocodeCacheConfig::default());
    if !geocoder.has_service() {
        warn!("GOOGLE_MAPS_API_KEY not set, geocoding uses the built-in place table only");
    }

    // Load the catalog (fail fast if a configured file is unusable)
    let mut catalog = StaticCatalog::builtin().expect("Built-in catalog is invalid");
    if let Some(path) = env_var("TOURISM_CATALOG_PATH") {
        catalog = catalog
            .with_attractions_file(&path)
            .expect("Failed to load attraction catalog");
        info!(%path, "loaded attraction catalog");
    }

    let state = AppState::new(geocoder, catalog, PlannerConfig::default());
    let app = create_router(state);

    let addr: SocketAddr = env_var("TOURISM_BIND_ADDR")
        .as_deref()
        .unwrap_or(DEFAULT_BIND_ADDR)
        .parse()
        .expect("TOURISM_BIND_ADDR is not a valid socket address");

    info!(%addr, "tourism route planner listening");
    info!("GET  /health, /api/attractions, /api/hotels");
    info!("POST /api/route/calculate, /api/route/order, /api/route/optimize");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
