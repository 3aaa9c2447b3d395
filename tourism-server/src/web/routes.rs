//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::catalog::{AttractionCatalog, HotelCatalog};
use crate::domain::{Hotel, PointOfInterest, RouteEndpoint};
use crate::geo::round_to;
use crate::planner::{
    build_route, find_nearby, group_by_city, nearest_neighbor_order, resolve_endpoint,
    total_distance,
};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/attractions", get(list_attractions))
        .route("/api/attractions/:id", get(get_attraction))
        .route("/api/hotels", get(list_hotels))
        .route("/api/hotels/:id", get(get_hotel))
        .route("/api/route/calculate", post(calculate_route))
        .route("/api/route/order", post(order_attractions))
        .route("/api/route/optimize", post(optimize_itinerary))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List attractions, optionally filtered by city and interest.
async fn list_attractions(
    State(state): State<AppState>,
    Query(query): Query<AttractionQuery>,
) -> Json<AttractionListResponse> {
    let catalog = &*state.catalog;
    let attractions: Vec<&PointOfInterest> =
        match (query.city.as_deref(), query.interest.as_deref()) {
            (Some(city), None) => catalog.by_city(city),
            (Some(city), Some(interest)) => catalog
                .by_city(city)
                .into_iter()
                .filter(|a| a.matches_any_interest(&[interest]))
                .collect(),
            (None, Some(interest)) => catalog.by_interest(interest),
            (None, None) => catalog.list_all().iter().collect(),
        };

    let attractions: Vec<PointOfInterest> = attractions.into_iter().cloned().collect();
    Json(AttractionListResponse {
        count: attractions.len(),
        attractions,
    })
}

/// Look up one attraction.
async fn get_attraction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointOfInterest>, AppError> {
    state
        .catalog
        .by_id(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound {
            message: format!("Attraction {id} not found"),
        })
}

/// List hotels, optionally filtered by city.
async fn list_hotels(
    State(state): State<AppState>,
    Query(query): Query<HotelQuery>,
) -> Json<HotelListResponse> {
    let hotels: Vec<Hotel> = match query.city.as_deref() {
        Some(city) => state.catalog.hotels_by_city(city).into_iter().cloned().collect(),
        None => state.catalog.list_hotels().to_vec(),
    };

    Json(HotelListResponse {
        count: hotels.len(),
        hotels,
    })
}

/// Look up one hotel.
async fn get_hotel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Hotel>, AppError> {
    state
        .catalog
        .hotel_by_id(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound {
            message: format!("Hotel {id} not found"),
        })
}

/// Calculate a route and the attractions along it.
async fn calculate_route(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CalculateRouteResponse>, AppError> {
    let req: CalculateRouteRequest = parse_body(&body)?;

    let origin = required_endpoint("origin", req.origin)?;
    let destination = required_endpoint("destination", req.destination)?;

    let radius_km = match req.buffer_km {
        None => state.config.default_radius_km,
        Some(km) if km.is_finite() && km >= 0.0 => km,
        Some(km) => {
            return Err(AppError::BadRequest {
                message: format!("buffer_km must be a non-negative number, got {km}"),
            });
        }
    };

    let route = build_route(&*state.geocoder, &origin, &destination, &state.config).await;
    if route.origin_source.is_fallback() || route.destination_source.is_fallback() {
        debug!(
            origin_source = %route.origin_source,
            destination_source = %route.destination_source,
            "route uses fallback coordinates"
        );
    }

    let interests = req.interests.unwrap_or_default();
    let nearby_attractions = find_nearby(
        &*state.catalog,
        &route.waypoints,
        radius_km,
        &interests,
        req.dedup.unwrap_or(state.config.dedup),
    );

    info!(
        distance_km = route.distance_km,
        radius_km,
        suggestions = nearby_attractions.len(),
        "route calculated"
    );

    Ok(Json(CalculateRouteResponse {
        suggestions_count: nearby_attractions.len(),
        route,
        nearby_attractions,
    }))
}

/// Order attractions by greedy nearest neighbour from a start location.
async fn order_attractions(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<OrderResponse>, AppError> {
    let req: OrderRequest = parse_body(&body)?;

    let attractions = select_attractions(&*state.catalog, req.selection)?;
    let start = required_endpoint("start_location", req.start_location)?;
    let start = resolve_endpoint(&*state.geocoder, &start).await;

    let ordered = nearest_neighbor_order(attractions, start.coordinate);
    let total_distance_km = round_to(total_distance(start.coordinate, &ordered), 2);

    Ok(Json(OrderResponse {
        start: start.coordinate,
        start_source: start.source,
        attractions: ordered,
        total_distance_km,
    }))
}

/// Group attractions into one day per city.
async fn optimize_itinerary(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<OptimizeResponse>, AppError> {
    let req: OptimizeRequest = parse_body(&body)?;

    let attractions = select_attractions(&*state.catalog, req.selection)?;
    let total_attractions = attractions.len();
    let optimized_days = group_by_city(attractions, state.config.hours_per_attraction);

    Ok(Json(OptimizeResponse {
        total_days: optimized_days.len(),
        total_attractions,
        optimized_days,
    }))
}

/// Parse a JSON body, logging it on failure.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(body), "invalid request body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

/// Reject a missing or blank endpoint, or one with coordinates off the globe.
fn required_endpoint(
    field: &str,
    endpoint: Option<RouteEndpoint>,
) -> Result<RouteEndpoint, AppError> {
    match endpoint {
        None => Err(AppError::BadRequest {
            message: format!("{field} is required"),
        }),
        Some(RouteEndpoint::Place(place)) if place.trim().is_empty() => {
            Err(AppError::BadRequest {
                message: format!("{field} must not be empty"),
            })
        }
        Some(RouteEndpoint::Coordinate(c)) => {
            c.validate().map_err(|e| AppError::BadRequest {
                message: format!("{field}: {e}"),
            })?;
            Ok(RouteEndpoint::Coordinate(c))
        }
        Some(place) => Ok(place),
    }
}

/// Turn a selection into attraction records.
///
/// Identifiers are looked up in the catalog; inline records are checked for
/// valid coordinates.
fn select_attractions<C: AttractionCatalog + ?Sized>(
    catalog: &C,
    selection: AttractionSelection,
) -> Result<Vec<PointOfInterest>, AppError> {
    if !selection.attraction_ids.is_empty() {
        return selection
            .attraction_ids
            .iter()
            .map(|id| {
                catalog.by_id(id).cloned().ok_or_else(|| AppError::NotFound {
                    message: format!("Attraction {id} not found"),
                })
            })
            .collect();
    }

    if selection.attractions.is_empty() {
        return Err(AppError::BadRequest {
            message: "Attractions list is required".to_string(),
        });
    }

    for attraction in &selection.attractions {
        attraction
            .coordinates
            .validate()
            .map_err(|e| AppError::BadRequest {
                message: format!("Attraction {}: {e}", attraction.id),
            })?;
    }
    Ok(selection.attractions)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
