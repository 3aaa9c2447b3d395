//! End-to-end tests of the HTTP API on a real listener.

use serde_json::{Value, json};

use tourism_server::catalog::StaticCatalog;
use tourism_server::geocode::Geocoder;
use tourism_server::planner::PlannerConfig;
use tourism_server::web::{AppState, create_router};

/// Serve the app on an ephemeral port and return its base URL.
async fn spawn_app() -> String {
    let state = AppState::new(
        Geocoder::offline(),
        StaticCatalog::builtin().unwrap(),
        PlannerConfig::default(),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, create_router(state)).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn health() {
    let base = spawn_app().await;
    let body = reqwest::get(format!("{base}/health"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn attraction_by_id_and_missing() {
    let base = spawn_app().await;

    let found = reqwest::get(format!("{base}/api/attractions/jamshedpur_002"))
        .await
        .unwrap();
    assert_eq!(found.status(), 200);
    let found: Value = found.json().await.unwrap();
    assert_eq!(found["city"], "Jamshedpur");
    assert!(found["type"].is_string());

    let missing = reqwest::get(format!("{base}/api/attractions/nowhere"))
        .await
        .unwrap();
    assert_eq!(missing.status(), 404);
    let error: Value = missing.json().await.unwrap();
    assert!(error["error"].as_str().unwrap().contains("nowhere"));
}

#[tokio::test]
async fn calculate_route_over_http() {
    let base = spawn_app().await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/api/route/calculate"))
        .json(&json!({"origin": "Ranchi", "destination": "Jamshedpur"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["route"]["waypoints"].as_array().unwrap().len(), 6);
    assert_eq!(body["route"]["origin_source"], "lookup_table");
    assert_eq!(body["suggestions_count"], 6);

    let nearby = body["nearby_attractions"].as_array().unwrap();
    assert_eq!(nearby[0]["id"], "ranchi_006");
    assert_eq!(nearby[0]["distance_from_route"], 0.0);
    assert_eq!(nearby[5]["id"], "jamshedpur_004");
}

#[tokio::test]
async fn bad_request_body() {
    let base = spawn_app().await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/api/route/order"))
        .json(&json!({"attraction_ids": [], "attractions": []}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let error: Value = resp.json().await.unwrap();
    assert!(error["error"].is_string());
}
