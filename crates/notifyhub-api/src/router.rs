//! Route definitions for the NotifyHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::handlers;
use crate::state::AppState;

/// Build the route tree without middleware layers.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(notification_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Notification endpoints.
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            post(handlers::notification::create_notification),
        )
        .route(
            "/notifications/{id}",
            get(handlers::notification::get_notification),
        )
        .route(
            "/notifications/unseen-count/{user_id}",
            get(handlers::notification::unseen_count),
        )
        .route(
            "/notifications/unseen-notifications/{user_id}",
            get(handlers::notification::unseen_notifications),
        )
        .route(
            "/notifications/unseen-seen-notification/{user_id}",
            get(handlers::notification::unseen_seen_notifications),
        )
        .route(
            "/notifications/notification-view/{user_id}",
            get(handlers::notification::notification_view),
        )
        .route(
            "/notifications/mark-as-seen/{user_id}",
            put(handlers::notification::mark_as_seen),
        )
        .route(
            "/notifications/update-status/{user_id}",
            put(handlers::notification::update_status),
        )
}

/// Health check endpoints (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}
