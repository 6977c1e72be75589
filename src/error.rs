use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Failures surfaced by the contact relay endpoint.
///
/// Every failure collapses into one of two JSON shapes on the wire;
/// the cause is logged server-side only.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("missing required fields")]
    MissingFields,

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("email delivery failed: {0}")]
    Email(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::MissingFields => (StatusCode::BAD_REQUEST, "Missing required fields"),
            AppError::MalformedBody(detail) => {
                tracing::error!(detail = %detail, "rejected malformed contact payload");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
            AppError::Email(err) => {
                tracing::error!(error = %err, "failed to relay contact message");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
