//! Repository implementations for the NotifyHub entities.

pub mod notification;
pub mod sending_status;
pub mod user;

pub use notification::NotificationRepository;
pub use sending_status::SendingStatusRepository;
pub use user::UserRepository;
