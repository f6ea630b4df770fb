//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use mondrian_recolor::SourceImage;
use neon_mondrian::models::AppConfig;
use neon_mondrian::server::{build_router, create_app_state};
use neon_mondrian::services::Studio;

use super::fixtures;

/// Test application with router and direct access to the studio
pub struct TestApp {
    router: axum::Router,
    pub studio: Arc<Studio>,
}

impl TestApp {
    /// Create a test app around the two-pixel scenario image
    /// (fixed background `#c8c8c8`, red substituted by green).
    pub fn new() -> Self {
        Self::with_source(fixtures::scenario_source(), &fixtures::scenario_config())
    }

    /// Create a test app for any source and configuration
    pub fn with_source(source: SourceImage, config: &AppConfig) -> Self {
        let state = create_app_state(source, config).expect("Failed to create app state");
        let studio = state.studio.clone();
        let router = build_router(state);

        Self { router, studio }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request without a body
    pub async fn post(&self, path: &str) -> TestResponse {
        self.request(Request::post(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(request).await
    }

    /// Fetch and decode the current frame
    pub async fn frame_rgba(&self) -> Vec<u8> {
        let response = self.get("/api/frame.png").await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.text());
        neon_mondrian::rendering::decode_png(&response.body)
            .expect("Frame is not a valid PNG")
            .rgba()
            .to_vec()
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Check if response is a PNG image
    pub fn is_png(&self) -> bool {
        self.body.len() >= 8 && &self.body[0..8] == b"\x89PNG\r\n\x1a\n"
    }
}
