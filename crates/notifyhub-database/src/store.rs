//! The notification data-store adapter.
//!
//! [`NotificationStore`] is the persistence seam the service layer works
//! against. Two backends implement it: [`PgNotificationStore`] (PostgreSQL,
//! composed from the concrete repositories) and
//! [`crate::memory::MemoryNotificationStore`] (single-node in-memory
//! tables).

use async_trait::async_trait;
use sqlx::PgPool;

use notifyhub_core::error::{AppError, ErrorKind};
use notifyhub_core::result::AppResult;
use notifyhub_core::types::{NotificationId, SeenFilter, SendingStatusId, UserId};
use notifyhub_entity::notification::Notification;
use notifyhub_entity::sending_status::{SendingStatus, StatusWithNotification};
use notifyhub_entity::user::User;

use crate::repositories::{NotificationRepository, SendingStatusRepository, UserRepository};

/// Persistence contract for the notification service.
#[async_trait]
pub trait NotificationStore: Send + Sync + 'static {
    /// Find a user by id.
    async fn find_user(&self, id: UserId) -> AppResult<Option<User>>;

    /// Find a notification by id, soft-deleted or not.
    async fn find_notification(&self, id: NotificationId) -> AppResult<Option<Notification>>;

    /// Atomically insert a notification together with its initial sending
    /// status.
    async fn create_notification(
        &self,
        notification: &Notification,
        status: &SendingStatus,
    ) -> AppResult<()>;

    /// Whether the user has any non-deleted notifications.
    async fn has_notifications(&self, user_id: UserId) -> AppResult<bool>;

    /// Whether the user has any sending statuses.
    async fn has_statuses(&self, user_id: UserId) -> AppResult<bool>;

    /// Count the user's unseen statuses.
    async fn count_unseen(&self, user_id: UserId) -> AppResult<i64>;

    /// List the user's statuses joined with their notifications.
    ///
    /// `Seen` results are ordered by the notification's creation date
    /// descending; other filters carry no ordering guarantee.
    async fn list_statuses(
        &self,
        user_id: UserId,
        filter: SeenFilter,
    ) -> AppResult<Vec<StatusWithNotification>>;

    /// The user's oldest unseen status, by creation date with the
    /// identifier as tie-break.
    async fn first_unseen(&self, user_id: UserId) -> AppResult<Option<SendingStatus>>;

    /// Mark one status as seen.
    async fn mark_seen(&self, id: SendingStatusId) -> AppResult<()>;

    /// Mark every unseen status for the user as seen; returns the number
    /// of rows flipped.
    async fn mark_all_seen(&self, user_id: UserId) -> AppResult<u64>;

    /// Backend liveness probe.
    async fn ping(&self) -> AppResult<()>;
}

/// PostgreSQL-backed notification store.
#[derive(Debug, Clone)]
pub struct PgNotificationStore {
    pool: PgPool,
    users: UserRepository,
    notifications: NotificationRepository,
    statuses: SendingStatusRepository,
}

impl PgNotificationStore {
    /// Create a store over an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            notifications: NotificationRepository::new(pool.clone()),
            statuses: SendingStatusRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl NotificationStore for PgNotificationStore {
    async fn find_user(&self, id: UserId) -> AppResult<Option<User>> {
        self.users.find_by_id(id).await
    }

    async fn find_notification(&self, id: NotificationId) -> AppResult<Option<Notification>> {
        self.notifications.find_by_id(id).await
    }

    async fn create_notification(
        &self,
        notification: &Notification,
        status: &SendingStatus,
    ) -> AppResult<()> {
        self.notifications.create_with_status(notification, status).await
    }

    async fn has_notifications(&self, user_id: UserId) -> AppResult<bool> {
        self.notifications.exists_for_user(user_id).await
    }

    async fn has_statuses(&self, user_id: UserId) -> AppResult<bool> {
        self.statuses.exists_for_user(user_id).await
    }

    async fn count_unseen(&self, user_id: UserId) -> AppResult<i64> {
        self.statuses.count_unseen(user_id).await
    }

    async fn list_statuses(
        &self,
        user_id: UserId,
        filter: SeenFilter,
    ) -> AppResult<Vec<StatusWithNotification>> {
        self.statuses.find_with_notifications(user_id, filter).await
    }

    async fn first_unseen(&self, user_id: UserId) -> AppResult<Option<SendingStatus>> {
        self.statuses.first_unseen(user_id).await
    }

    async fn mark_seen(&self, id: SendingStatusId) -> AppResult<()> {
        self.statuses.mark_seen(id).await
    }

    async fn mark_all_seen(&self, user_id: UserId) -> AppResult<u64> {
        self.statuses.mark_all_seen(user_id).await
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Store ping failed", e))
    }
}
