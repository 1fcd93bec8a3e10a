//! Notification handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use notifyhub_core::error::AppError;
use notifyhub_core::types::{NotificationId, UserId};
use notifyhub_service::notification::{MarkAllOutcome, MarkOneOutcome};

use crate::dto::request::CreateNotificationRequest;
use crate::dto::response::{
    MessageResponse, NotificationResponse, NotificationWithSeenResponse, SeenNotificationResponse,
    UnseenCountResponse, UnseenNotificationResponse,
};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/notifications
pub async fn create_notification(
    State(state): State<AppState>,
    Json(req): Json<CreateNotificationRequest>,
) -> Result<(StatusCode, Json<NotificationResponse>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let notification = state
        .notification_service
        .create_notification(req.user_id, &req.quotation_name, req.expiry_date)
        .await?;

    Ok((StatusCode::CREATED, Json(notification.into())))
}

/// GET /api/notifications/{id}
pub async fn get_notification(
    State(state): State<AppState>,
    Path(id): Path<NotificationId>,
) -> Result<Json<NotificationResponse>, ApiError> {
    let notification = state.notification_service.get_notification(id).await?;
    Ok(Json(notification.into()))
}

/// GET /api/notifications/unseen-count/{user_id}
pub async fn unseen_count(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<UnseenCountResponse>, ApiError> {
    let count = state.notification_service.unseen_count(user_id).await?;
    Ok(Json(UnseenCountResponse {
        user_id,
        unseen_count: count,
    }))
}

/// GET /api/notifications/unseen-notifications/{user_id}
pub async fn unseen_notifications(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<Vec<UnseenNotificationResponse>>, ApiError> {
    let rows = state.notification_service.list_unseen(user_id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// GET /api/notifications/unseen-seen-notification/{user_id}
pub async fn unseen_seen_notifications(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<Vec<NotificationWithSeenResponse>>, ApiError> {
    let rows = state
        .notification_service
        .list_seen_and_unseen(user_id)
        .await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// GET /api/notifications/notification-view/{user_id}
pub async fn notification_view(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<Vec<SeenNotificationResponse>>, ApiError> {
    let listing = state.notification_service.list_seen(user_id).await?;

    let items = listing
        .items
        .into_iter()
        .map(|row| SeenNotificationResponse {
            username: listing.user_name.clone(),
            notification_id: row.notification_id,
            quotation_name: row.quotation_name,
            created_date: row.created_date,
            expiry_date: row.expiry_date,
            sending_status_id: row.status_id,
        })
        .collect();

    Ok(Json(items))
}

/// PUT /api/notifications/mark-as-seen/{user_id}
pub async fn mark_as_seen(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<MessageResponse>, ApiError> {
    let outcome = state.notification_service.mark_one_seen(user_id).await?;
    let message = match outcome {
        MarkOneOutcome::OneMarked => "One notification marked as seen successfully.",
        MarkOneOutcome::AlreadyAllSeen => "All notifications have already been seen.",
    };
    Ok(Json(MessageResponse::new(message)))
}

/// PUT /api/notifications/update-status/{user_id}
pub async fn update_status(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<MessageResponse>, ApiError> {
    let outcome = state.notification_service.mark_all_seen(user_id).await?;
    let message = match outcome {
        MarkAllOutcome::Updated(_) => "Sending statuses updated successfully.",
        MarkAllOutcome::AlreadyAllSeen => "All notifications are already seen.",
    };
    Ok(Json(MessageResponse::new(message)))
}
