//! # notifyhub-entity
//!
//! Domain entity models for NotifyHub. Every struct in this crate
//! represents a database table row or a read view over joined rows. All
//! entities derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and
//! `sqlx::FromRow`.

pub mod notification;
pub mod sending_status;
pub mod user;

pub use notification::Notification;
pub use sending_status::{SendingStatus, StatusWithNotification};
pub use user::User;
