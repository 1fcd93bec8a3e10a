//! NotifyHub Server — notification bookkeeping service.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use notifyhub_api::AppState;
use notifyhub_core::config::AppConfig;
use notifyhub_core::error::AppError;
use notifyhub_database::connection::DatabasePool;
use notifyhub_database::store::{NotificationStore, PgNotificationStore};
use notifyhub_service::notification::NotificationService;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("NOTIFYHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting NotifyHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = DatabasePool::connect(&config.database).await?;
    notifyhub_database::migration::run_migrations(db.pool()).await?;

    // ── Step 2: Store and service wiring ─────────────────────────
    let store: Arc<dyn NotificationStore> =
        Arc::new(PgNotificationStore::new(db.pool().clone()));
    let notification_service = Arc::new(NotificationService::new(Arc::clone(&store)));

    // ── Step 3: Build state and serve ────────────────────────────
    let state = AppState {
        config: Arc::new(config.clone()),
        store,
        notification_service,
    };

    notifyhub_api::app::serve(&config, state).await
}
