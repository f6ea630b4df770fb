//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::error::ApiError;
use crate::models::{AppConfig, ParamsUpdate};
use crate::services::{trigger_queue, Studio, TriggerQueue};
use mondrian_recolor::SourceImage;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub studio: Arc<Studio>,
    pub triggers: TriggerQueue,
}

/// Create application state for `source`.
///
/// Must be called inside a tokio runtime; the trigger queue worker is
/// spawned here.
pub fn create_app_state(source: SourceImage, config: &AppConfig) -> anyhow::Result<AppState> {
    let studio = Arc::new(
        Studio::from_config(source, config)
            .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?,
    );
    let triggers = TriggerQueue::spawn(studio.clone(), trigger_queue::DEFAULT_CAPACITY);

    Ok(AppState { studio, triggers })
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/frame.png", get(handle_frame_png))
        .route("/api/params", get(handle_get_params).post(handle_update_params))
        .route("/api/recompute", post(handle_recompute))
        .route("/api/reset", post(handle_reset))
        .route("/api/background", post(handle_background))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_frame_png(State(state): State<AppState>) -> Result<Response, ApiError> {
    api::handle_frame_png(State(state.studio)).await
}

async fn handle_get_params(State(state): State<AppState>) -> impl IntoResponse {
    api::handle_get_params(State(state.studio)).await
}

async fn handle_update_params(
    State(state): State<AppState>,
    body: Json<ParamsUpdate>,
) -> Result<impl IntoResponse, ApiError> {
    api::handle_update_params(State(state.studio), State(state.triggers), body).await
}

async fn handle_recompute(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    api::handle_recompute(State(state.triggers)).await
}

async fn handle_reset(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    api::handle_reset(State(state.triggers)).await
}

async fn handle_background(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    api::handle_background(State(state.studio), State(state.triggers)).await
}
