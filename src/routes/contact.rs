use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::{Value, json};
use validator::Validate;

use crate::contact::ContactMessage;
use crate::error::AppError;
use crate::routes::AppState;

/// POST /api/contact - Relay a contact form submission to the
/// operator's mailbox.
///
/// Invokes the mailer exactly once per valid request; retried requests
/// cause duplicate sends.
pub async fn action(
    State(state): State<AppState>,
    payload: Result<Json<ContactMessage>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    // A body that fails to parse is collapsed into the generic failure,
    // the same as any other exception inside the endpoint.
    let Json(message) = payload.map_err(|err| AppError::MalformedBody(err.to_string()))?;

    message.validate().map_err(|_| AppError::MissingFields)?;

    state
        .mailer
        .send(
            &state.config.email.contact_address,
            &message.subject_line(),
            &message.html_body(),
            &message.text_body(),
        )
        .await
        .map_err(AppError::Email)?;

    Ok(Json(json!({ "success": true })))
}
