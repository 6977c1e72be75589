use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::email::Mailer;
use crate::template::{NotFoundTemplate, render};

mod assets;
mod contact;
mod health;
mod index;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub mailer: Arc<dyn Mailer>,
}

pub async fn fallback() -> Response {
    let page = render(NotFoundTemplate);

    (StatusCode::NOT_FOUND, page).into_response()
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::page))
        .route("/health", get(health::health))
        .route("/api/contact", post(contact::action))
        .route("/static/{*path}", get(assets::serve))
        .fallback(fallback)
        .with_state(state)
}
