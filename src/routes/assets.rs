use axum::{
    body::Body,
    extract::Path,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "static/"]
struct Assets;

/// GET /static/{*path} - Serve an embedded asset
pub async fn serve(Path(path): Path<String>) -> Response {
    match Assets::get(&path) {
        Some(content) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();

            (
                [(header::CONTENT_TYPE, mime.as_ref().to_string())],
                Body::from(content.data),
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_assets_present() {
        assert!(Assets::get("css/site.css").is_some());
        assert!(Assets::get("js/contact.js").is_some());
    }

    #[tokio::test]
    async fn test_unknown_asset_is_404() {
        let response = serve(Path("js/missing.js".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
