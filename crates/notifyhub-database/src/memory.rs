//! In-memory notification store using a Tokio mutex.
//!
//! Implements the same [`NotificationStore`] contract as the PostgreSQL
//! backend over plain vectors. Suitable for single-node smoke deployments
//! and for exercising the service and HTTP layers in tests without a
//! database.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use notifyhub_core::result::AppResult;
use notifyhub_core::types::{NotificationId, SeenFilter, SendingStatusId, UserId};
use notifyhub_entity::notification::Notification;
use notifyhub_entity::sending_status::{SendingStatus, StatusWithNotification};
use notifyhub_entity::user::User;

use crate::store::NotificationStore;

/// Internal tables for the memory-based store.
#[derive(Debug, Default)]
struct InnerTables {
    users: Vec<User>,
    notifications: Vec<Notification>,
    statuses: Vec<SendingStatus>,
}

/// In-memory notification store.
#[derive(Debug, Clone, Default)]
pub struct MemoryNotificationStore {
    /// Protected tables.
    tables: Arc<Mutex<InnerTables>>,
}

impl MemoryNotificationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user row.
    ///
    /// User provisioning is outside the notification service proper, so it
    /// is not part of the [`NotificationStore`] contract.
    pub async fn insert_user(&self, user: User) {
        self.tables.lock().await.users.push(user);
    }

    /// Seed a notification row without a sending status.
    pub async fn insert_notification(&self, notification: Notification) {
        self.tables.lock().await.notifications.push(notification);
    }

    /// Number of stored notifications.
    pub async fn notification_count(&self) -> usize {
        self.tables.lock().await.notifications.len()
    }

    /// Number of stored sending statuses.
    pub async fn status_count(&self) -> usize {
        self.tables.lock().await.statuses.len()
    }
}

impl InnerTables {
    fn join_row(&self, status: &SendingStatus) -> Option<StatusWithNotification> {
        // The create path guarantees the notification exists; rows with a
        // dangling reference are skipped rather than invented.
        let notification = self
            .notifications
            .iter()
            .find(|n| n.id == status.notification_id)?;
        let user_name = self
            .users
            .iter()
            .find(|u| u.id == status.user_id)
            .map(|u| u.user_name.clone());

        Some(StatusWithNotification {
            status_id: status.id,
            user_id: status.user_id,
            is_seen: status.is_seen,
            notification_id: notification.id,
            quotation_name: notification.quotation_name.clone(),
            created_date: notification.created_date,
            expiry_date: notification.expiry_date,
            user_name,
        })
    }
}

#[async_trait]
impl NotificationStore for MemoryNotificationStore {
    async fn find_user(&self, id: UserId) -> AppResult<Option<User>> {
        let tables = self.tables.lock().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_notification(&self, id: NotificationId) -> AppResult<Option<Notification>> {
        let tables = self.tables.lock().await;
        Ok(tables.notifications.iter().find(|n| n.id == id).cloned())
    }

    async fn create_notification(
        &self,
        notification: &Notification,
        status: &SendingStatus,
    ) -> AppResult<()> {
        // Single lock acquisition: the pair insert is all-or-nothing, like
        // the transactional PostgreSQL path.
        let mut tables = self.tables.lock().await;
        tables.notifications.push(notification.clone());
        tables.statuses.push(status.clone());
        Ok(())
    }

    async fn has_notifications(&self, user_id: UserId) -> AppResult<bool> {
        let tables = self.tables.lock().await;
        Ok(tables
            .notifications
            .iter()
            .any(|n| n.user_id == user_id && !n.is_deleted))
    }

    async fn has_statuses(&self, user_id: UserId) -> AppResult<bool> {
        let tables = self.tables.lock().await;
        Ok(tables.statuses.iter().any(|s| s.user_id == user_id))
    }

    async fn count_unseen(&self, user_id: UserId) -> AppResult<i64> {
        let tables = self.tables.lock().await;
        Ok(tables
            .statuses
            .iter()
            .filter(|s| s.user_id == user_id && !s.is_seen)
            .count() as i64)
    }

    async fn list_statuses(
        &self,
        user_id: UserId,
        filter: SeenFilter,
    ) -> AppResult<Vec<StatusWithNotification>> {
        let tables = self.tables.lock().await;
        let mut rows: Vec<StatusWithNotification> = tables
            .statuses
            .iter()
            .filter(|s| s.user_id == user_id && filter.matches(s.is_seen))
            .filter_map(|s| tables.join_row(s))
            .collect();

        if filter == SeenFilter::Seen {
            rows.sort_by(|a, b| b.created_date.cmp(&a.created_date));
        }

        Ok(rows)
    }

    async fn first_unseen(&self, user_id: UserId) -> AppResult<Option<SendingStatus>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .statuses
            .iter()
            .filter(|s| s.user_id == user_id && !s.is_seen)
            .min_by_key(|s| (s.created_date, s.id))
            .cloned())
    }

    async fn mark_seen(&self, id: SendingStatusId) -> AppResult<()> {
        let mut tables = self.tables.lock().await;
        if let Some(status) = tables.statuses.iter_mut().find(|s| s.id == id) {
            status.is_seen = true;
        }
        Ok(())
    }

    async fn mark_all_seen(&self, user_id: UserId) -> AppResult<u64> {
        let mut tables = self.tables.lock().await;
        let mut flipped = 0u64;
        for status in tables
            .statuses
            .iter_mut()
            .filter(|s| s.user_id == user_id && !s.is_seen)
        {
            status.is_seen = true;
            flipped += 1;
        }
        Ok(flipped)
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[tokio::test]
    async fn test_create_inserts_pair() {
        let store = MemoryNotificationStore::new();
        let user_id = UserId::new();
        let notification = Notification::new(user_id, "Quote-A".to_string(), Utc::now());
        let status = SendingStatus::new(user_id, notification.id);

        store.create_notification(&notification, &status).await.unwrap();

        assert_eq!(store.notification_count().await, 1);
        assert_eq!(store.status_count().await, 1);
        assert_eq!(store.count_unseen(user_id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_mark_all_seen_reports_flipped_rows() {
        let store = MemoryNotificationStore::new();
        let user_id = UserId::new();
        for name in ["Quote-A", "Quote-B"] {
            let n = Notification::new(user_id, name.to_string(), Utc::now());
            let s = SendingStatus::new(user_id, n.id);
            store.create_notification(&n, &s).await.unwrap();
        }

        assert_eq!(store.mark_all_seen(user_id).await.unwrap(), 2);
        assert_eq!(store.mark_all_seen(user_id).await.unwrap(), 0);
        assert_eq!(store.count_unseen(user_id).await.unwrap(), 0);
    }
}
