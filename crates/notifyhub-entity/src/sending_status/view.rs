//! Joined read view over a sending status and its notification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use notifyhub_core::types::{NotificationId, SendingStatusId, UserId};

/// One row of the list queries: a sending status joined with the
/// notification it tracks and the display name of its user.
///
/// `created_date` and `expiry_date` are the notification's dates, not the
/// status's. `user_name` is absent when the referenced user row is missing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StatusWithNotification {
    /// Sending-status identifier.
    pub status_id: SendingStatusId,
    /// The user the status is for.
    pub user_id: UserId,
    /// Whether the notification has been seen.
    pub is_seen: bool,
    /// The tracked notification.
    pub notification_id: NotificationId,
    /// The quotation the notification announces.
    pub quotation_name: String,
    /// When the notification was created.
    pub created_date: DateTime<Utc>,
    /// When the notification expires.
    pub expiry_date: DateTime<Utc>,
    /// Display name of the status's user.
    pub user_name: Option<String>,
}
