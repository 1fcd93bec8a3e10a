//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use notifyhub_core::config::AppConfig;
use notifyhub_database::store::NotificationStore;
use notifyhub_service::notification::NotificationService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Data-store adapter, used directly by the health endpoints.
    pub store: Arc<dyn NotificationStore>,
    /// Notification service.
    pub notification_service: Arc<NotificationService>,
}
