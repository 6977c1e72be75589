use axum::{extract::State, response::IntoResponse};

use crate::routes::AppState;
use crate::template::render;

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub contact_email: String,
}

pub async fn page(State(state): State<AppState>) -> impl IntoResponse {
    render(IndexTemplate {
        contact_email: state.config.email.contact_address.clone(),
    })
}
