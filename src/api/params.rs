use axum::{
    extract::State,
    response::{IntoResponse, Json},
    Json as JsonExtractor,
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{ParamsUpdate, ParamsView};
use crate::services::{Studio, Trigger, TriggerQueue};

/// Current parameters
///
/// Colors are lowercase `#rrggbb`.
#[utoipa::path(
    get,
    path = "/api/params",
    responses(
        (status = 200, description = "Current parameters", body = ParamsView),
    ),
    tag = "Parameters"
)]
pub async fn handle_get_params(State(studio): State<Arc<Studio>>) -> impl IntoResponse {
    Json(ParamsView::from(&studio.snapshot().await))
}

/// Update parameters and recompute
///
/// Absent fields keep their value. Numbers outside their range are clamped;
/// an unparseable color rejects the whole update.
#[utoipa::path(
    post,
    path = "/api/params",
    request_body = ParamsUpdate,
    responses(
        (status = 200, description = "Parameters applied and frame recomputed", body = ParamsView),
        (status = 400, description = "Invalid color"),
        (status = 503, description = "Trigger queue unavailable"),
    ),
    tag = "Parameters"
)]
pub async fn handle_update_params(
    State(studio): State<Arc<Studio>>,
    State(triggers): State<TriggerQueue>,
    JsonExtractor(update): JsonExtractor<ParamsUpdate>,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = studio.update(&update).await?;

    if !update.is_empty() {
        triggers.submit(Trigger::Recompute).await?;
    }

    tracing::info!(
        threshold = snapshot.threshold.get(),
        transparency = snapshot.transparency.get(),
        "Parameters applied"
    );

    Ok(Json(ParamsView::from(&snapshot)))
}
