use axum::{
    body::Body,
    http::{Request, Response, header},
    middleware::Next,
};

/// Middleware to set cache control headers
/// - Embedded assets: cache aggressively (they only change with the binary)
/// - All other routes: no caching
pub async fn cache_control_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let is_asset = req.uri().path().starts_with("/static/");
    let mut response = next.run(req).await;

    let headers = response.headers_mut();

    if is_asset {
        headers.insert(
            header::CACHE_CONTROL,
            "public, max-age=31536000, immutable".parse().unwrap(),
        );
    } else {
        headers.insert(
            header::CACHE_CONTROL,
            "no-store, no-cache, must-revalidate".parse().unwrap(),
        );
    }

    response
}
