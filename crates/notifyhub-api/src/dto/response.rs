//! Response DTOs.
//!
//! The wire format is camelCase; the per-endpoint shapes mirror the
//! external surface exactly, including the nested notification copy the
//! unseen and combined listings carry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use notifyhub_core::types::{NotificationId, SendingStatusId, UserId};
use notifyhub_entity::notification::Notification;
use notifyhub_entity::sending_status::StatusWithNotification;

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A notification as returned by the create and get endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    /// Notification identifier.
    pub id: NotificationId,
    /// The recipient user.
    pub user_id: UserId,
    /// The quotation the notification announces.
    pub quotation_name: String,
    /// When the notification was created.
    pub created_date: DateTime<Utc>,
    /// When the notification expires.
    pub expiry_date: DateTime<Utc>,
    /// Soft-delete flag.
    pub is_deleted: bool,
}

impl From<Notification> for NotificationResponse {
    fn from(n: Notification) -> Self {
        Self {
            id: n.id,
            user_id: n.user_id,
            quotation_name: n.quotation_name,
            created_date: n.created_date,
            expiry_date: n.expiry_date,
            is_deleted: n.is_deleted,
        }
    }
}

/// The nested copy of a notification's core fields carried by the list
/// endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSummary {
    /// Notification identifier.
    pub id: NotificationId,
    /// The quotation the notification announces.
    pub quotation_name: String,
    /// When the notification was created.
    pub created_date: DateTime<Utc>,
    /// When the notification expires.
    pub expiry_date: DateTime<Utc>,
}

impl From<&StatusWithNotification> for NotificationSummary {
    fn from(row: &StatusWithNotification) -> Self {
        Self {
            id: row.notification_id,
            quotation_name: row.quotation_name.clone(),
            created_date: row.created_date,
            expiry_date: row.expiry_date,
        }
    }
}

/// One element of the unseen-notifications listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnseenNotificationResponse {
    /// Notification identifier.
    pub notification_id: NotificationId,
    /// The quotation the notification announces.
    pub quotation_name: String,
    /// When the notification was created.
    pub created_date: DateTime<Utc>,
    /// When the notification expires.
    pub expiry_date: DateTime<Utc>,
    /// Sending-status identifier.
    pub sending_status_id: SendingStatusId,
    /// Nested copy of the notification's core fields.
    pub notification: NotificationSummary,
    /// Display name of the status's user.
    pub user_name: Option<String>,
}

impl From<StatusWithNotification> for UnseenNotificationResponse {
    fn from(row: StatusWithNotification) -> Self {
        let notification = NotificationSummary::from(&row);
        Self {
            notification_id: row.notification_id,
            quotation_name: row.quotation_name,
            created_date: row.created_date,
            expiry_date: row.expiry_date,
            sending_status_id: row.status_id,
            notification,
            user_name: row.user_name,
        }
    }
}

/// One element of the combined seen-and-unseen listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationWithSeenResponse {
    /// Notification identifier.
    pub notification_id: NotificationId,
    /// The quotation the notification announces.
    pub quotation_name: String,
    /// When the notification was created.
    pub created_date: DateTime<Utc>,
    /// When the notification expires.
    pub expiry_date: DateTime<Utc>,
    /// Sending-status identifier.
    pub sending_status_id: SendingStatusId,
    /// Whether the notification has been seen.
    pub is_seen: bool,
    /// Nested copy of the notification's core fields.
    pub notification: NotificationSummary,
}

impl From<StatusWithNotification> for NotificationWithSeenResponse {
    fn from(row: StatusWithNotification) -> Self {
        let notification = NotificationSummary::from(&row);
        Self {
            notification_id: row.notification_id,
            quotation_name: row.quotation_name,
            created_date: row.created_date,
            expiry_date: row.expiry_date,
            sending_status_id: row.status_id,
            is_seen: row.is_seen,
            notification,
        }
    }
}

/// One element of the seen-notifications view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeenNotificationResponse {
    /// Display name of the queried user, constant across the result set.
    pub username: Option<String>,
    /// Notification identifier.
    pub notification_id: NotificationId,
    /// The quotation the notification announces.
    pub quotation_name: String,
    /// When the notification was created.
    pub created_date: DateTime<Utc>,
    /// When the notification expires.
    pub expiry_date: DateTime<Utc>,
    /// Sending-status identifier.
    pub sending_status_id: SendingStatusId,
}

/// Unseen-count response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnseenCountResponse {
    /// The queried user.
    pub user_id: UserId,
    /// Number of unseen notifications.
    pub unseen_count: i64,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Detailed health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Overall status.
    pub status: String,
    /// Store backend status.
    pub database: String,
}
