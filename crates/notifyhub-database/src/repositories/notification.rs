//! Notification repository implementation.

use sqlx::PgPool;

use notifyhub_core::error::{AppError, ErrorKind};
use notifyhub_core::result::AppResult;
use notifyhub_core::types::{NotificationId, UserId};
use notifyhub_entity::notification::Notification;
use notifyhub_entity::sending_status::SendingStatus;

/// Repository for notification CRUD operations.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a notification by primary key.
    ///
    /// The soft-delete flag is deliberately not checked here; a logically
    /// deleted notification remains fetchable by id.
    pub async fn find_by_id(&self, id: NotificationId) -> AppResult<Option<Notification>> {
        sqlx::query_as::<_, Notification>("SELECT * FROM notifications WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find notification by id", e)
            })
    }

    /// Whether the user has any non-deleted notifications.
    pub async fn exists_for_user(&self, user_id: UserId) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM notifications WHERE user_id = $1 AND is_deleted = FALSE)",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to probe notifications", e)
        })
    }

    /// Insert a notification together with its initial sending status.
    ///
    /// Both rows are written inside one transaction: either the pair lands
    /// or nothing does.
    pub async fn create_with_status(
        &self,
        notification: &Notification,
        status: &SendingStatus,
    ) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query(
            "INSERT INTO notifications (id, user_id, quotation_name, created_date, expiry_date, is_deleted) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(notification.id)
        .bind(notification.user_id)
        .bind(&notification.quotation_name)
        .bind(notification.created_date)
        .bind(notification.expiry_date)
        .bind(notification.is_deleted)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to insert notification", e)
        })?;

        sqlx::query(
            "INSERT INTO sending_statuses (id, user_id, notification_id, created_date, is_seen) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(status.id)
        .bind(status.user_id)
        .bind(status.notification_id)
        .bind(status.created_date)
        .bind(status.is_seen)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to insert sending status", e)
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit notification create", e)
        })
    }
}
