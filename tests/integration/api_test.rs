//! Integration tests for the address, health and fallback endpoints.

mod helpers;

use axum::http::StatusCode;

use helpers::TestApp;
use newsdesk_service::testing::StaticPostalCodes;

#[tokio::test]
async fn test_address_lookup() {
    let app = TestApp::new();
    let expected = helpers::known_address();

    let response = app.request("GET", "/api/address/01001-000", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["street"], expected.street.as_str());
    assert_eq!(response.body["city"], expected.city.as_str());
    assert_eq!(response.body["areaCode"], expected.area_code.as_str());
}

#[tokio::test]
async fn test_address_invalid_cep() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/address/123", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid postal code");
}

#[tokio::test]
async fn test_address_unknown_cep() {
    let app = TestApp::with_postal_codes(StaticPostalCodes::empty());
    let response = app.request("GET", "/api/address/99999999", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

#[tokio::test]
async fn test_unknown_route_is_json_not_found() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/nothing-here", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}
