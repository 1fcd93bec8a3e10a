//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use notifyhub_core::types::UserId;

/// A registered recipient of notifications.
///
/// Users are provisioned by an external path; this service only reads them
/// to resolve display names and to enforce the foreign-key precondition of
/// notification creation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Display name.
    pub user_name: String,
    /// When the user was created.
    pub created: DateTime<Utc>,
    /// Soft-delete flag.
    pub is_deleted: bool,
}
