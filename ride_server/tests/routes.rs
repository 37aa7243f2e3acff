use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use ride_common::RideQuoteResponse;
use ride_server::{AppState, app_router};
use serde_json::{Value, json};
use tower::ServiceExt;

fn off_peak() -> u32 {
    14
}

fn app() -> (AppState, Router) {
    let state = AppState::with_clock(off_peak);
    (state.clone(), app_router(state))
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn vehicle(id: &str, lat: f64, lng: f64, available: bool) -> Value {
    json!({
        "vehicle_id": id,
        "latitude": lat,
        "longitude": lng,
        "available": available,
        "category": "Sedan"
    })
}

#[tokio::test]
async fn root_reports_status() {
    let (_, app) = app();
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "API running successfully");
}

#[tokio::test]
async fn quote_without_fleet_at_same_spot_is_base_fare() {
    let (_, app) = app();
    let (status, body) = post_json(
        app,
        "/ride/quote",
        json!({
            "pickup_lat": 12.9716,
            "pickup_lng": 77.5946,
            "drop_lat": 12.9716,
            "drop_lng": 77.5946,
            "traffic_level": 0
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recommended_vehicles"], json!([]));
    let quote: RideQuoteResponse = serde_json::from_value(body).unwrap();
    assert_eq!(quote, RideQuoteResponse { eta: 0.0, cost: 30.0, demand: 1.0 });
}

#[tokio::test]
async fn vehicle_update_is_echoed_and_used_for_quotes() {
    let (state, app) = app();
    let (status, body) =
        post_json(app.clone(), "/vehicles/update", vehicle("KA-01", 0.0, 0.0, true)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Vehicle updated successfully");
    assert_eq!(body["vehicle"]["vehicle_id"], "KA-01");

    post_json(app.clone(), "/vehicles/update", vehicle("KA-02", 5.0, 5.0, true)).await;
    post_json(app.clone(), "/vehicles/update", vehicle("KA-03", 0.0, 0.0, false)).await;
    assert_eq!(state.fleet.read().unwrap().available_by_distance(0.0, 0.0).len(), 2);

    let (status, body) = post_json(
        app,
        "/ride/quote",
        json!({
            "pickup_lat": 0.0,
            "pickup_lng": 0.0,
            "drop_lat": 0.0,
            "drop_lng": 0.0,
            "traffic_level": 1
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    // Signal 2 spread over 2 available vehicles; nearest one is at the pickup.
    assert_eq!(body["demand"], 1.0);
    assert_eq!(body["eta"], 0.0);
    assert_eq!(body["cost"], 30.0);
}

#[tokio::test]
async fn out_of_range_quote_is_rejected() {
    let (_, app) = app();
    let (status, body) = post_json(
        app,
        "/ride/quote",
        json!({
            "pickup_lat": 12.9716,
            "pickup_lng": 77.5946,
            "drop_lat": 12.9352,
            "drop_lng": 77.6245,
            "traffic_level": 9
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert!(body["message"].as_str().unwrap().contains("traffic_level"));
}

#[tokio::test]
async fn null_coordinate_is_a_field_error() {
    let (_, app) = app();
    let (status, body) = post_json(
        app,
        "/ride/quote",
        json!({
            "pickup_lat": null,
            "pickup_lng": 77.5946,
            "drop_lat": 12.9352,
            "drop_lng": 77.6245,
            "traffic_level": null
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("pickup_lat"), "{message}");
    assert!(message.contains("finite"), "{message}");
}

#[tokio::test]
async fn null_traffic_level_is_a_field_error() {
    let (_, app) = app();
    let (status, body) = post_json(
        app,
        "/ride/quote",
        json!({
            "pickup_lat": 12.9716,
            "pickup_lng": 77.5946,
            "drop_lat": 12.9352,
            "drop_lng": 77.6245,
            "traffic_level": null
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert!(body["message"].as_str().unwrap().contains("traffic_level"));
}

#[tokio::test]
async fn malformed_bodies_get_json_errors() {
    let (_, app) = app();
    let (status, body) = post_json(app.clone(), "/ride/quote", json!({ "pickup_lat": "north" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/ride/quote")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], 400);

    let (status, body) = post_json(app, "/vehicles/update", json!({ "vehicle_id": "KA-09" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn quote_recommends_nearest_vehicles_first() {
    let (_, app) = app();
    post_json(app.clone(), "/vehicles/update", vehicle("far", 0.1, 0.0, true)).await;
    post_json(app.clone(), "/vehicles/update", vehicle("near", 0.01, 0.0, true)).await;
    post_json(app.clone(), "/vehicles/update", vehicle("mid", 0.05, 0.0, true)).await;
    post_json(app.clone(), "/vehicles/update", vehicle("closest-but-busy", 0.0, 0.0, false)).await;
    post_json(app.clone(), "/vehicles/update", vehicle("farthest", 0.2, 0.0, true)).await;

    let ride = json!({
        "pickup_lat": 0.0,
        "pickup_lng": 0.0,
        "drop_lat": 0.0,
        "drop_lng": 0.0,
        "traffic_level": 0
    });
    let (status, body) = post_json(app.clone(), "/ride/quote", ride.clone()).await;
    assert_eq!(status, StatusCode::OK);
    let picks = body["recommended_vehicles"].as_array().unwrap();
    let ids: Vec<_> = picks.iter().map(|v| v["vehicle_id"].as_str().unwrap()).collect();
    assert_eq!(ids, ["near", "mid", "far"]);
    assert_eq!(picks[0]["category"], "Sedan");
    assert_eq!(picks[0]["distance_km"], 1.11);
    assert_eq!(picks[0]["eta_minutes"], 2.22);
    assert!(picks[0]["estimated_cost"].as_f64().unwrap() >= 30.0);
    // Overall ETA is driven by the nearest vehicle.
    assert_eq!(body["eta"], 2.22);

    let mut capped = ride;
    capped["top_k"] = json!(1);
    let (status, body) = post_json(app, "/ride/quote", capped).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recommended_vehicles"].as_array().unwrap().len(), 1);
    assert_eq!(body["recommended_vehicles"][0]["vehicle_id"], "near");
}
