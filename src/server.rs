use std::sync::Arc;

use anyhow::Result;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::email::EmailService;
use crate::routes::AppState;

pub async fn serve(
    config: crate::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting portfolio server...");

    // Use CLI overrides if provided, otherwise use config
    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    // The email service is constructed once and reused for all requests
    let mailer = EmailService::new(&config.email)?;

    let state = AppState {
        config,
        mailer: Arc::new(mailer),
    };

    let app = crate::routes::router(state)
        // Cache control (no-cache for pages and API, immutable for static)
        .layer(axum::middleware::from_fn(
            crate::middleware::cache_control_middleware,
        ))
        // Minify HTML responses before compression
        .layer(axum::middleware::map_response(
            crate::middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    let shutdown_signal = async {
        let ctrl_c = async {
            tokio::signal::ctrl_c()
                .await
                .expect("failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("failed to install SIGTERM handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                tracing::info!("Received Ctrl+C signal");
            },
            _ = terminate => {
                tracing::info!("Received SIGTERM signal");
            },
        }

        tracing::info!("Starting graceful shutdown...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    tracing::info!("Graceful shutdown complete");

    Ok(())
}
