use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

/// Render an askama template into an HTML response, collapsing render
/// failures into a plain 500.
pub fn render<T: askama::Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!("Failed to render template. Error: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
        }
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;
