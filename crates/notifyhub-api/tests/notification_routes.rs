//! Integration tests for the notification HTTP surface, driven through
//! the full router against the in-memory store backend.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{Duration, Utc};
use serde_json::{Value, json};
use tower::ServiceExt;

use notifyhub_api::app::build_app;
use notifyhub_api::state::AppState;
use notifyhub_core::config::AppConfig;
use notifyhub_core::types::UserId;
use notifyhub_database::memory::MemoryNotificationStore;
use notifyhub_database::store::NotificationStore;
use notifyhub_entity::user::User;
use notifyhub_service::notification::NotificationService;

/// Test application context.
struct TestApp {
    /// The Axum router for making test requests.
    router: Router,
    /// Store handle for seeding fixtures.
    store: Arc<MemoryNotificationStore>,
}

impl TestApp {
    fn new() -> Self {
        let store = Arc::new(MemoryNotificationStore::new());
        let store_dyn: Arc<dyn NotificationStore> = store.clone();
        let notification_service = Arc::new(NotificationService::new(store_dyn.clone()));

        let state = AppState {
            config: Arc::new(AppConfig::default()),
            store: store_dyn,
            notification_service,
        };

        Self {
            router: build_app(state),
            store,
        }
    }

    async fn seed_user(&self, name: &str) -> UserId {
        let user = User {
            id: UserId::new(),
            user_name: name.to_string(),
            created: Utc::now(),
            is_deleted: false,
        };
        let id = user.id;
        self.store.insert_user(user).await;
        id
    }

    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .expect("request"),
            None => builder.body(Body::empty()).expect("request"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router response");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        // Rejections produced by extractors carry plain-text bodies.
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    async fn create_notification(&self, user_id: UserId, quotation_name: &str) -> Value {
        let (status, body) = self
            .request(
                "POST",
                "/api/notifications",
                Some(json!({
                    "userId": user_id,
                    "quotationName": quotation_name,
                    "expiryDate": Utc::now() + Duration::days(7),
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body
    }
}

#[tokio::test]
async fn test_create_and_get_roundtrip() {
    let app = TestApp::new();
    let user_id = app.seed_user("alice").await;

    let created = app.create_notification(user_id, "Quote-A").await;
    assert_eq!(created["quotationName"], "Quote-A");
    assert_eq!(created["isDeleted"], false);

    let id = created["id"].as_str().expect("id").to_string();
    let (status, fetched) = app
        .request("GET", &format!("/api/notifications/{id}"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["quotationName"], "Quote-A");
    assert_eq!(fetched["expiryDate"], created["expiryDate"]);
}

#[tokio::test]
async fn test_create_unknown_user_returns_404() {
    let app = TestApp::new();

    let (status, body) = app
        .request(
            "POST",
            "/api/notifications",
            Some(json!({
                "userId": UserId::new(),
                "quotationName": "Quote-A",
                "expiryDate": Utc::now(),
            })),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
    assert_eq!(app.store.notification_count().await, 0);
}

#[tokio::test]
async fn test_create_empty_quotation_name_returns_400() {
    let app = TestApp::new();
    let user_id = app.seed_user("alice").await;

    let (status, body) = app
        .request(
            "POST",
            "/api/notifications",
            Some(json!({
                "userId": user_id,
                "quotationName": "",
                "expiryDate": Utc::now(),
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_unknown_notification_returns_404() {
    let app = TestApp::new();

    let (status, _) = app
        .request(
            "GET",
            &format!("/api/notifications/{}", UserId::new()),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_malformed_id_returns_400() {
    let app = TestApp::new();

    let (status, _) = app
        .request("GET", "/api/notifications/not-a-uuid", None)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unseen_count_is_zero_for_unknown_user() {
    let app = TestApp::new();
    let user_id = UserId::new();

    let (status, body) = app
        .request(
            "GET",
            &format!("/api/notifications/unseen-count/{user_id}"),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["userId"], json!(user_id));
    assert_eq!(body["unseenCount"], 0);
}

#[tokio::test]
async fn test_unseen_listing_carries_nested_notification_and_username() {
    let app = TestApp::new();
    let user_id = app.seed_user("alice").await;
    app.create_notification(user_id, "Quote-A").await;

    let (status, body) = app
        .request(
            "GET",
            &format!("/api/notifications/unseen-notifications/{user_id}"),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["quotationName"], "Quote-A");
    assert_eq!(rows[0]["userName"], "alice");
    assert_eq!(rows[0]["notification"]["quotationName"], "Quote-A");
    assert_eq!(rows[0]["notificationId"], rows[0]["notification"]["id"]);
}

#[tokio::test]
async fn test_unseen_listing_empty_is_ok() {
    let app = TestApp::new();

    let (status, body) = app
        .request(
            "GET",
            &format!("/api/notifications/unseen-notifications/{}", UserId::new()),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_combined_listing_reports_seen_flags() {
    let app = TestApp::new();
    let user_id = app.seed_user("alice").await;
    app.create_notification(user_id, "Quote-A").await;
    app.create_notification(user_id, "Quote-B").await;

    let (status, _) = app
        .request(
            "PUT",
            &format!("/api/notifications/mark-as-seen/{user_id}"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .request(
            "GET",
            &format!("/api/notifications/unseen-seen-notification/{user_id}"),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().expect("array");
    assert_eq!(rows.len(), 2);
    let seen: Vec<bool> = rows
        .iter()
        .map(|r| r["isSeen"].as_bool().expect("isSeen"))
        .collect();
    assert_eq!(seen.iter().filter(|s| **s).count(), 1);
    assert!(rows.iter().all(|r| r.get("userName").is_none()));
}

#[tokio::test]
async fn test_notification_view_404_when_nothing_seen() {
    let app = TestApp::new();
    let user_id = app.seed_user("alice").await;
    app.create_notification(user_id, "Quote-A").await;

    let (status, body) = app
        .request(
            "GET",
            &format!("/api/notifications/notification-view/{user_id}"),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_notification_view_lists_seen_with_username() {
    let app = TestApp::new();
    let user_id = app.seed_user("alice").await;
    app.create_notification(user_id, "Quote-A").await;

    app.request(
        "PUT",
        &format!("/api/notifications/update-status/{user_id}"),
        None,
    )
    .await;

    let (status, body) = app
        .request(
            "GET",
            &format!("/api/notifications/notification-view/{user_id}"),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["username"], "alice");
    assert_eq!(rows[0]["quotationName"], "Quote-A");
}

#[tokio::test]
async fn test_mark_as_seen_messages() {
    let app = TestApp::new();
    let user_id = app.seed_user("alice").await;
    app.create_notification(user_id, "Quote-A").await;

    let (status, body) = app
        .request(
            "PUT",
            &format!("/api/notifications/mark-as-seen/{user_id}"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "One notification marked as seen successfully.");

    let (status, body) = app
        .request(
            "PUT",
            &format!("/api/notifications/mark-as-seen/{user_id}"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "All notifications have already been seen.");
}

#[tokio::test]
async fn test_update_status_sweep_and_404s() {
    let app = TestApp::new();
    let user_id = app.seed_user("alice").await;

    // No notifications at all.
    let (status, body) = app
        .request(
            "PUT",
            &format!("/api/notifications/update-status/{user_id}"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No notifications found for the given user id.");

    app.create_notification(user_id, "Quote-A").await;
    app.create_notification(user_id, "Quote-B").await;

    let (status, body) = app
        .request(
            "PUT",
            &format!("/api/notifications/update-status/{user_id}"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Sending statuses updated successfully.");

    let (status, body) = app
        .request(
            "PUT",
            &format!("/api/notifications/update-status/{user_id}"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "All notifications are already seen.");

    let (_, body) = app
        .request(
            "GET",
            &format!("/api/notifications/unseen-count/{user_id}"),
            None,
        )
        .await;
    assert_eq!(body["unseenCount"], 0);
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = TestApp::new();

    let (status, body) = app.request("GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = app.request("GET", "/api/health/detailed", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "connected");
}
