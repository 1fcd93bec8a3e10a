//! # notifyhub-service
//!
//! Business logic service layer for NotifyHub. The notification service
//! implements every bookkeeping operation over the store adapter.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod notification;

pub use notification::{MarkAllOutcome, MarkOneOutcome, NotificationService, SeenListing};
