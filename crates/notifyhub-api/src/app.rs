//! Application builder — wires router + middleware into an Axum app and
//! runs the server.

use axum::{Router, middleware as axum_middleware};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use notifyhub_core::config::AppConfig;
use notifyhub_core::error::AppError;

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(request_logging))
}

/// Binds the configured address and serves the application until ctrl-c.
pub async fn serve(config: &AppConfig, state: AppState) -> Result<(), AppError> {
    let app = build_app(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("NotifyHub server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {e}");
    }
}
