//! Sending-status repository implementation.

use sqlx::PgPool;

use notifyhub_core::error::{AppError, ErrorKind};
use notifyhub_core::result::AppResult;
use notifyhub_core::types::{SeenFilter, SendingStatusId, UserId};
use notifyhub_entity::sending_status::{SendingStatus, StatusWithNotification};

const LIST_COLUMNS: &str = "ss.id AS status_id, ss.user_id AS user_id, ss.is_seen AS is_seen, \
     n.id AS notification_id, n.quotation_name AS quotation_name, \
     n.created_date AS created_date, n.expiry_date AS expiry_date, \
     u.user_name AS user_name";

/// Repository for sending-status queries and seen-flag updates.
#[derive(Debug, Clone)]
pub struct SendingStatusRepository {
    pool: PgPool,
}

impl SendingStatusRepository {
    /// Create a new sending-status repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Whether the user has any sending statuses at all.
    pub async fn exists_for_user(&self, user_id: UserId) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM sending_statuses WHERE user_id = $1)",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to probe sending statuses", e)
        })
    }

    /// Count unseen statuses for a user.
    pub async fn count_unseen(&self, user_id: UserId) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM sending_statuses WHERE user_id = $1 AND is_seen = FALSE",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count unseen", e))
    }

    /// List a user's statuses joined with their notifications and the
    /// user's display name.
    ///
    /// `Seen` results are ordered by the notification's creation date,
    /// most recent first; the other filters carry no ordering guarantee.
    pub async fn find_with_notifications(
        &self,
        user_id: UserId,
        filter: SeenFilter,
    ) -> AppResult<Vec<StatusWithNotification>> {
        let sql = match filter {
            SeenFilter::Unseen => format!(
                "SELECT {LIST_COLUMNS} FROM sending_statuses ss \
                 JOIN notifications n ON n.id = ss.notification_id \
                 LEFT JOIN users u ON u.id = ss.user_id \
                 WHERE ss.user_id = $1 AND ss.is_seen = FALSE"
            ),
            SeenFilter::Seen => format!(
                "SELECT {LIST_COLUMNS} FROM sending_statuses ss \
                 JOIN notifications n ON n.id = ss.notification_id \
                 LEFT JOIN users u ON u.id = ss.user_id \
                 WHERE ss.user_id = $1 AND ss.is_seen = TRUE \
                 ORDER BY n.created_date DESC"
            ),
            SeenFilter::All => format!(
                "SELECT {LIST_COLUMNS} FROM sending_statuses ss \
                 JOIN notifications n ON n.id = ss.notification_id \
                 LEFT JOIN users u ON u.id = ss.user_id \
                 WHERE ss.user_id = $1"
            ),
        };

        sqlx::query_as::<_, StatusWithNotification>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list sending statuses", e)
            })
    }

    /// Find the user's oldest unseen status.
    ///
    /// Ordered by creation date with the identifier as a deterministic
    /// tie-break.
    pub async fn first_unseen(&self, user_id: UserId) -> AppResult<Option<SendingStatus>> {
        sqlx::query_as::<_, SendingStatus>(
            "SELECT * FROM sending_statuses WHERE user_id = $1 AND is_seen = FALSE \
             ORDER BY created_date ASC, id ASC LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find first unseen", e)
        })
    }

    /// Mark a single status as seen.
    pub async fn mark_seen(&self, id: SendingStatusId) -> AppResult<()> {
        sqlx::query("UPDATE sending_statuses SET is_seen = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark seen", e))?;
        Ok(())
    }

    /// Mark every unseen status for a user as seen in one batch.
    ///
    /// Returns the number of rows flipped.
    pub async fn mark_all_seen(&self, user_id: UserId) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE sending_statuses SET is_seen = TRUE WHERE user_id = $1 AND is_seen = FALSE",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark all seen", e))?;
        Ok(result.rows_affected())
    }
}
