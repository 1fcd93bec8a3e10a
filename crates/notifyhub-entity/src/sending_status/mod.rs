//! Sending-status domain entities.

pub mod model;
pub mod view;

pub use model::SendingStatus;
pub use view::StatusWithNotification;
