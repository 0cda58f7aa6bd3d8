//! Integration tests for `GET /api/workshop` and `GET /api/health`.

mod helpers;

use std::sync::Arc;

use axum::http::StatusCode;

use helpers::{BrokenLedger, TestApp};

#[tokio::test]
async fn test_workshop_info_when_empty() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/workshop", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["seatsRemaining"], 20);
    assert_eq!(response.body["totalSeats"], 20);
    assert_eq!(response.body["priceLabel"], "Early Bird Price");
    assert_eq!(response.body["price"], 2499);
    assert_eq!(response.body["workshop"]["name"], "Digiskill Academy");
    assert_eq!(response.body["workshop"]["durationWeeks"], 4);
    assert_eq!(response.body["workshop"]["platform"], "Live Online Sessions");
}

#[tokio::test]
async fn test_workshop_standard_price() {
    let app = TestApp::with_registrations(15).await;
    let response = app.request("GET", "/api/workshop", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["seatsRemaining"], 5);
    assert_eq!(response.body["priceLabel"], "Standard Price");
    assert_eq!(response.body["price"], 4499);
}

#[tokio::test]
async fn test_workshop_sold_out_clamps_at_zero() {
    let app = TestApp::with_registrations(23).await;
    let response = app.request("GET", "/api/workshop", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["seatsRemaining"], 0);
    assert_eq!(response.body["priceLabel"], "Sold Out");
    assert_eq!(response.body["price"], 0);
}

#[tokio::test]
async fn test_workshop_storage_failure_is_generic_500() {
    let app = TestApp::with_ledger(Arc::new(BrokenLedger));
    let response = app.request("GET", "/api/workshop", None).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, serde_json::json!({ "error": "Database error" }));
}

#[tokio::test]
async fn test_health_ok() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "connected");
}

#[tokio::test]
async fn test_health_degraded() {
    let app = TestApp::with_ledger(Arc::new(BrokenLedger));
    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["database"], "unreachable");
}
