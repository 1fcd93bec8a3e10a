//! Notification domain entity.

pub mod model;

pub use model::Notification;
