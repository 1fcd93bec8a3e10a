//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use notifyhub_core::types::{NotificationId, UserId};

/// A notification addressed to a user, announcing a quotation with a
/// validity window.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: NotificationId,
    /// The recipient user.
    pub user_id: UserId,
    /// The quotation this notification announces.
    pub quotation_name: String,
    /// When the notification was created.
    pub created_date: DateTime<Utc>,
    /// When the notification expires.
    pub expiry_date: DateTime<Utc>,
    /// Soft-delete flag.
    pub is_deleted: bool,
}

impl Notification {
    /// Create a new notification for a user.
    ///
    /// Assigns a fresh identifier and stamps `created_date` with the current
    /// time; the creation time is never caller-supplied.
    pub fn new(user_id: UserId, quotation_name: String, expiry_date: DateTime<Utc>) -> Self {
        Self {
            id: NotificationId::new(),
            user_id,
            quotation_name,
            created_date: Utc::now(),
            expiry_date,
            is_deleted: false,
        }
    }

    /// Check if the notification has expired.
    pub fn is_expired(&self) -> bool {
        self.expiry_date <= Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_new_assigns_fresh_ids() {
        let user_id = UserId::new();
        let a = Notification::new(user_id, "Quote-A".to_string(), Utc::now());
        let b = Notification::new(user_id, "Quote-B".to_string(), Utc::now());
        assert_ne!(a.id, b.id);
        assert!(!a.is_deleted);
    }

    #[test]
    fn test_is_expired() {
        let user_id = UserId::new();
        let future = Notification::new(
            user_id,
            "Quote-A".to_string(),
            Utc::now() + Duration::days(7),
        );
        let past = Notification::new(
            user_id,
            "Quote-B".to_string(),
            Utc::now() - Duration::days(1),
        );
        assert!(!future.is_expired());
        assert!(past.is_expired());
    }
}
