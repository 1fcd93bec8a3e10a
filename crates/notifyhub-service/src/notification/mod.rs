//! Notification bookkeeping service.

pub mod service;

pub use service::{MarkAllOutcome, MarkOneOutcome, NotificationService, SeenListing};
