//! Notification bookkeeping operations.
//!
//! Each method maps to one endpoint of the external surface. The
//! empty-result conventions differ per operation and are part of the
//! contract: the seen listing treats an empty result set as not-found,
//! while the unseen and combined listings return empty sequences and the
//! unseen count returns a plain zero.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use notifyhub_core::error::AppError;
use notifyhub_core::result::AppResult;
use notifyhub_core::types::{NotificationId, SeenFilter, UserId};
use notifyhub_database::store::NotificationStore;
use notifyhub_entity::notification::Notification;
use notifyhub_entity::sending_status::{SendingStatus, StatusWithNotification};

/// Result of marking a single notification as seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOneOutcome {
    /// One status was flipped from unseen to seen.
    OneMarked,
    /// Every status was already seen; nothing was written.
    AlreadyAllSeen,
}

/// Result of the mark-all-seen sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkAllOutcome {
    /// The given number of statuses were flipped in one batch.
    Updated(u64),
    /// Every status was already seen; nothing was written.
    AlreadyAllSeen,
}

/// The seen-notification listing with the user's display name resolved
/// once for the whole result set.
#[derive(Debug, Clone)]
pub struct SeenListing {
    /// Display name of the queried user, if the user row exists.
    pub user_name: Option<String>,
    /// Seen statuses, most recently created notification first.
    pub items: Vec<StatusWithNotification>,
}

/// Manages notification records and their per-user seen state.
pub struct NotificationService {
    /// Data-store adapter.
    store: Arc<dyn NotificationStore>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(store: Arc<dyn NotificationStore>) -> Self {
        Self { store }
    }

    /// Creates a notification for a user together with its initial unseen
    /// sending status.
    ///
    /// Fails with a validation error when the quotation name is blank and
    /// with not-found when the user does not exist. The notification and
    /// status are persisted atomically.
    pub async fn create_notification(
        &self,
        user_id: UserId,
        quotation_name: &str,
        expiry_date: DateTime<Utc>,
    ) -> AppResult<Notification> {
        if quotation_name.trim().is_empty() {
            return Err(AppError::validation("Quotation name must not be empty."));
        }

        let user = self
            .store
            .find_user(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found."))?;

        let notification = Notification::new(user.id, quotation_name.to_string(), expiry_date);
        let status = SendingStatus::new(user.id, notification.id);
        self.store.create_notification(&notification, &status).await?;

        info!(
            notification_id = %notification.id,
            user_id = %user.id,
            "Created notification"
        );
        Ok(notification)
    }

    /// Fetches a notification by id.
    ///
    /// The soft-delete flag is not consulted: a logically deleted
    /// notification is still returned.
    pub async fn get_notification(&self, id: NotificationId) -> AppResult<Notification> {
        debug!(notification_id = %id, "Fetching notification");
        self.store
            .find_notification(id)
            .await?
            .ok_or_else(|| AppError::not_found("Notification not found."))
    }

    /// Counts the user's unseen notifications. A user with no statuses
    /// naturally counts zero.
    pub async fn unseen_count(&self, user_id: UserId) -> AppResult<i64> {
        debug!(user_id = %user_id, "Counting unseen notifications");
        self.store.count_unseen(user_id).await
    }

    /// Lists the user's unseen notifications, each row carrying the
    /// username of its own status. An empty sequence is a valid result.
    pub async fn list_unseen(&self, user_id: UserId) -> AppResult<Vec<StatusWithNotification>> {
        debug!(user_id = %user_id, "Listing unseen notifications");
        self.store.list_statuses(user_id, SeenFilter::Unseen).await
    }

    /// Lists the user's notifications regardless of seen state. An empty
    /// sequence is a valid result.
    pub async fn list_seen_and_unseen(
        &self,
        user_id: UserId,
    ) -> AppResult<Vec<StatusWithNotification>> {
        debug!(user_id = %user_id, "Listing seen and unseen notifications");
        self.store.list_statuses(user_id, SeenFilter::All).await
    }

    /// Lists the user's seen notifications, most recent first, with the
    /// display name resolved once for the whole result set.
    ///
    /// Unlike the other listings, an empty result set here is not-found.
    pub async fn list_seen(&self, user_id: UserId) -> AppResult<SeenListing> {
        let user_name = self
            .store
            .find_user(user_id)
            .await?
            .map(|u| u.user_name);

        let items = self.store.list_statuses(user_id, SeenFilter::Seen).await?;
        if items.is_empty() {
            return Err(AppError::not_found(
                "No seen notifications found for this user.",
            ));
        }

        debug!(user_id = %user_id, count = items.len(), "Listed seen notifications");
        Ok(SeenListing { user_name, items })
    }

    /// Marks the user's oldest unseen notification as seen.
    ///
    /// When nothing is unseen the call succeeds without writing.
    pub async fn mark_one_seen(&self, user_id: UserId) -> AppResult<MarkOneOutcome> {
        let Some(status) = self.store.first_unseen(user_id).await? else {
            return Ok(MarkOneOutcome::AlreadyAllSeen);
        };

        self.store.mark_seen(status.id).await?;
        info!(
            user_id = %user_id,
            status_id = %status.id,
            "Marked one notification as seen"
        );
        Ok(MarkOneOutcome::OneMarked)
    }

    /// Marks every unseen status for the user as seen in one batch.
    ///
    /// Fails with not-found when the user has no notifications at all, or
    /// notifications but no sending statuses. When everything is already
    /// seen the call succeeds without writing.
    pub async fn mark_all_seen(&self, user_id: UserId) -> AppResult<MarkAllOutcome> {
        if !self.store.has_notifications(user_id).await? {
            return Err(AppError::not_found(
                "No notifications found for the given user id.",
            ));
        }
        if !self.store.has_statuses(user_id).await? {
            return Err(AppError::not_found(
                "No sending statuses found for the given user id.",
            ));
        }

        if self.store.count_unseen(user_id).await? == 0 {
            return Ok(MarkAllOutcome::AlreadyAllSeen);
        }

        let updated = self.store.mark_all_seen(user_id).await?;
        info!(user_id = %user_id, updated, "Marked all notifications as seen");
        Ok(MarkAllOutcome::Updated(updated))
    }
}
