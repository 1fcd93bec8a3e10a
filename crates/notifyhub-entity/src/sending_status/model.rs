//! Sending-status entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use notifyhub_core::types::{NotificationId, SendingStatusId, UserId};

/// The per-user acknowledgement record tracking whether a notification has
/// been seen.
///
/// `is_seen` transitions from `false` to `true` only; no operation ever
/// resets a seen status.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SendingStatus {
    /// Unique sending-status identifier.
    pub id: SendingStatusId,
    /// The user this status is for.
    pub user_id: UserId,
    /// The notification this status tracks.
    pub notification_id: NotificationId,
    /// When the status was created.
    pub created_date: DateTime<Utc>,
    /// Whether the user has seen the notification.
    pub is_seen: bool,
}

impl SendingStatus {
    /// Create a new unseen status for a (user, notification) pair.
    pub fn new(user_id: UserId, notification_id: NotificationId) -> Self {
        Self {
            id: SendingStatusId::new(),
            user_id,
            notification_id,
            created_date: Utc::now(),
            is_seen: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_unseen() {
        let status = SendingStatus::new(UserId::new(), NotificationId::new());
        assert!(!status.is_seen);
    }
}
