//! # notifyhub-api
//!
//! HTTP API layer for NotifyHub built on Axum.
//!
//! Provides the REST endpoints, middleware (CORS, logging), DTOs, and
//! error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use state::AppState;
