//! Request DTOs with validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use notifyhub_core::types::UserId;

/// Create notification request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationRequest {
    /// The recipient user.
    pub user_id: UserId,
    /// The quotation this notification announces.
    #[validate(length(min = 1, message = "Quotation name is required"))]
    pub quotation_name: String,
    /// When the notification expires.
    pub expiry_date: DateTime<Utc>,
}
