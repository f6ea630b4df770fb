//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status,
        expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert response is a valid PNG image
pub fn assert_png(response: &TestResponse) {
    assert_ok(response);
    assert!(
        response.is_png(),
        "Expected PNG image, got {} bytes starting with {:?}",
        response.body.len(),
        &response.body[..8.min(response.body.len())]
    );

    let content_type = response
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok());
    assert_eq!(
        content_type,
        Some("image/png"),
        "Expected Content-Type: image/png"
    );
}

/// Assert an error response carries the JSON `{status, error}` body
pub fn assert_json_error(response: &TestResponse, expected: StatusCode) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();
    assert_eq!(json["status"].as_u64(), Some(expected.as_u16() as u64));
    assert!(
        json["error"].is_string(),
        "Expected error message, got {}",
        serde_json::to_string_pretty(&json).unwrap()
    );
}

/// Assert the params JSON matches the given values
pub fn assert_params(
    json: &serde_json::Value,
    substitutes: [&str; 3],
    background: &str,
    threshold: u64,
    transparency: u64,
) {
    assert_eq!(json["red"], substitutes[0]);
    assert_eq!(json["yellow"], substitutes[1]);
    assert_eq!(json["blue"], substitutes[2]);
    assert_eq!(json["background"], background);
    assert_eq!(json["threshold"], threshold);
    assert_eq!(json["transparency"], transparency);
}
