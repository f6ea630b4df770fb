use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mondrian_recolor::{ImageError, ParseColorError, RecolorError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("Trigger queue closed")]
    QueueClosed,
}

impl From<RecolorError> for ApiError {
    fn from(e: RecolorError) -> Self {
        ApiError::InvalidParameter(e.to_string())
    }
}

impl From<ParseColorError> for ApiError {
    fn from(e: ParseColorError) -> Self {
        ApiError::InvalidParameter(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("Unsupported PNG format: {0}")]
    UnsupportedFormat(String),

    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: u32, height: u32 },

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    #[error("Render task failed: {0}")]
    Task(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidParameter(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Render(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            ApiError::QueueClosed => (StatusCode::SERVICE_UNAVAILABLE, self.to_string()),
        };

        if status.is_server_error() {
            tracing::error!(error = %message, "Request failed");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": message,
        }));

        (status, body).into_response()
    }
}
