use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::ParamsView;
use crate::services::{Completed, Studio, Trigger, TriggerQueue};

/// Summary of a freshly published frame
#[derive(Debug, Serialize, ToSchema)]
pub struct FrameResponse {
    /// Frame width in pixels (0 for an empty source)
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Which pass produced the frame: "recompute" or "reset". Requests
    /// queued together run once, so this can differ from the one asked for.
    pub pass: String,
}

impl From<&Completed> for FrameResponse {
    fn from(done: &Completed) -> Self {
        let pass = match done.trigger {
            Trigger::Recompute => "recompute",
            Trigger::Reset => "reset",
        };
        Self {
            width: done.frame.width(),
            height: done.frame.height(),
            pass: pass.to_string(),
        }
    }
}

/// Background regeneration result
#[derive(Debug, Serialize, ToSchema)]
pub struct BackgroundResponse {
    /// Parameters after the new background was applied
    pub params: ParamsView,
    /// The recomputed frame
    pub frame: FrameResponse,
}

/// Current frame as PNG
///
/// Returns the last fully published frame. A pass in progress is never
/// visible here.
#[utoipa::path(
    get,
    path = "/api/frame.png",
    responses(
        (status = 200, description = "PNG image", content_type = "image/png"),
        (status = 500, description = "Encoding error (e.g. empty source image)"),
    ),
    tag = "Frame"
)]
pub async fn handle_frame_png(State(studio): State<Arc<Studio>>) -> Result<Response, ApiError> {
    let png_bytes = studio.frame_png().await?;

    tracing::debug!(size_bytes = png_bytes.len(), "Serving frame");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/png"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        Bytes::from(png_bytes),
    )
        .into_response())
}

/// Recompute the frame with the current parameters
#[utoipa::path(
    post,
    path = "/api/recompute",
    responses(
        (status = 200, description = "Frame recomputed", body = FrameResponse),
        (status = 503, description = "Trigger queue unavailable"),
    ),
    tag = "Frame"
)]
pub async fn handle_recompute(
    State(triggers): State<TriggerQueue>,
) -> Result<impl IntoResponse, ApiError> {
    let done = triggers.submit(Trigger::Recompute).await?;
    tracing::info!(
        width = done.frame.width(),
        height = done.frame.height(),
        ran = ?done.trigger,
        "Recomputed"
    );
    Ok(Json(FrameResponse::from(&done)))
}

/// Reset the frame to the untouched source image
#[utoipa::path(
    post,
    path = "/api/reset",
    responses(
        (status = 200, description = "Frame reset", body = FrameResponse),
        (status = 503, description = "Trigger queue unavailable"),
    ),
    tag = "Frame"
)]
pub async fn handle_reset(
    State(triggers): State<TriggerQueue>,
) -> Result<impl IntoResponse, ApiError> {
    let done = triggers.submit(Trigger::Reset).await?;
    tracing::info!(ran = ?done.trigger, "Frame reset to source");
    Ok(Json(FrameResponse::from(&done)))
}

/// Pick a new random background and recompute
#[utoipa::path(
    post,
    path = "/api/background",
    responses(
        (status = 200, description = "Background regenerated", body = BackgroundResponse),
        (status = 503, description = "Trigger queue unavailable"),
    ),
    tag = "Parameters"
)]
pub async fn handle_background(
    State(studio): State<Arc<Studio>>,
    State(triggers): State<TriggerQueue>,
) -> Result<impl IntoResponse, ApiError> {
    let background = studio.regenerate_background().await;
    let done = triggers.submit(Trigger::Recompute).await?;
    let snapshot = studio.snapshot().await;

    tracing::info!(background = %background, "Background regenerated");

    Ok(Json(BackgroundResponse {
        params: ParamsView::from(&snapshot),
        frame: FrameResponse::from(&done),
    }))
}
