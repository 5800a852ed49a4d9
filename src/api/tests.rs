use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum_test::TestServer;
use serde_json::{json, Value};

use super::{build_router, get_category, ApiError};
use crate::conversion::ConversionError;
use crate::state::AppState;

fn test_server() -> TestServer {
    TestServer::new(build_router(AppState::new())).unwrap()
}

fn convert_body(conversion_type: &str, from: &str, to: &str, value: Value) -> Value {
    json!({
        "value": value,
        "from_unit": from,
        "to_unit": to,
        "conversion_type": conversion_type,
    })
}

#[tokio::test]
async fn test_convert_celsius_to_fahrenheit() {
    let server = test_server();

    let response = server
        .post("/convert")
        .json(&convert_body("temperature", "Celsius", "Fahrenheit", json!(0.0)))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({"result": 32.0}));
}

#[tokio::test]
async fn test_convert_cups_to_ml() {
    let server = test_server();

    let response = server
        .post("/convert")
        .json(&convert_body("cooking", "cups", "ml", json!(1)))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let result = body["result"].as_f64().unwrap();
    assert!((result - 236.588).abs() < 0.1);
}

#[tokio::test]
async fn test_convert_unit_outside_category() {
    let server = test_server();

    let response = server
        .post("/convert")
        .json(&convert_body("length", "Celsius", "cm", json!(5.0)))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["kind"], "invalid_unit");
}

#[tokio::test]
async fn test_convert_unknown_category() {
    let server = test_server();

    let response = server
        .post("/convert")
        .json(&convert_body("speed", "kph", "mph", json!(5.0)))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["kind"], "invalid_category");
}

#[tokio::test]
async fn test_convert_null_value() {
    let server = test_server();

    let response = server
        .post("/convert")
        .json(&convert_body("weight", "kg", "pounds", Value::Null))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["kind"], "invalid_value");
}

#[tokio::test]
async fn test_convert_missing_field_is_rejected() {
    let server = test_server();

    let response = server
        .post("/convert")
        .json(&json!({"value": 1.0, "from_unit": "kg"}))
        .await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_convert_malformed_body_is_rejected() {
    let server = test_server();

    let response = server
        .post("/convert")
        .content_type("application/json")
        .text("{not json")
        .await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_list_categories() {
    let server = test_server();

    let response = server.get("/categories").await;

    response.assert_status_ok();
    let body: Value = response.json();
    let types: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["type"].as_str().unwrap())
        .collect();
    assert_eq!(types, vec!["length", "weight", "cooking", "temperature"]);
}

#[tokio::test]
async fn test_get_category() {
    let server = test_server();

    let response = server.get("/categories/temperature").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["units"], json!(["Celsius", "Fahrenheit", "Kelvin"]));
    assert_eq!(body["default_from"], "Celsius");
    assert_eq!(body["default_to"], "Fahrenheit");
}

#[tokio::test]
async fn test_get_unknown_category() {
    let result = get_category(Path("volume".to_string())).await;
    let err = result.unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_and_status() {
    let server = test_server();

    server.get("/health").await.assert_json(&json!({"status": "ok"}));

    let response = server.get("/status").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["name"], "unit-converter");
    assert!(body["started_at"].is_string());
    assert!(body["uptime_seconds"].as_i64().unwrap() >= 0);
}

#[tokio::test]
async fn test_unknown_route() {
    let server = test_server();

    let response = server.get("/nope").await;

    response.assert_status_not_found();
}

#[test]
fn test_api_error_response() {
    let err = ApiError::from(ConversionError::InvalidCategory("speed".to_string()));
    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
