//! Integration tests for the suspension manager and sweeper.

use std::sync::Arc;

use chrono::{Duration, Utc};
use http::StatusCode;

use clinichub_worker::jobs::suspension::SuspensionSweeper;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_suspend_then_login_is_disabled() {
    let app = TestApp::new().await;
    app.create_admin().await;
    let target_id = app
        .create_user_with_role("target@example.com", "grove-Lantern41", "PATIENT")
        .await;
    let admin_token = app.login("admin@example.com", "admin123").await;

    let response = app
        .request(
            "POST",
            &format!("/api/admin/users/{target_id}/suspend"),
            Some(serde_json::json!({ "duration": 1, "unit": "DAYS" })),
            Some(&admin_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let remaining = response.body["data"]["remaining_seconds"].as_i64().unwrap();
    // One day, allowing a little slack for the round trip.
    assert!((86_390..=86_400).contains(&remaining), "{remaining}");

    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "target@example.com",
                "password": "grove-Lantern41",
            })),
            None,
        )
        .await;

    assert_eq!(login.status, StatusCode::FORBIDDEN);
    assert_eq!(login.body["errorCode"], "ACCOUNT_DISABLED");
    // The message carries the suspension-end timestamp (~24h out).
    let message = login.body["message"].as_str().unwrap();
    let year = (Utc::now() + Duration::days(1)).format("%Y").to_string();
    assert!(message.contains("suspended until"));
    assert!(message.contains(&year));
}

#[tokio::test]
async fn test_activate_restores_login_and_is_idempotent() {
    let app = TestApp::new().await;
    app.create_admin().await;
    let target_id = app
        .create_user_with_role("lifted@example.com", "grove-Lantern41", "PATIENT")
        .await;
    let admin_token = app.login("admin@example.com", "admin123").await;

    app.request(
        "POST",
        &format!("/api/admin/users/{target_id}/suspend"),
        Some(serde_json::json!({ "duration": 2, "unit": "WEEKS" })),
        Some(&admin_token),
    )
    .await;

    let first = app
        .request(
            "POST",
            &format!("/api/admin/users/{target_id}/activate"),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);

    // Activating an already-active user is a no-op, not an error.
    let second = app
        .request(
            "POST",
            &format!("/api/admin/users/{target_id}/activate"),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(second.status, StatusCode::OK);

    let user = app.user_repo.find_by_id(target_id).await.unwrap().unwrap();
    assert!(user.suspension_end.is_none());

    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "lifted@example.com",
                "password": "grove-Lantern41",
            })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);
}

#[tokio::test]
async fn test_zero_duration_suspension_is_valid_and_already_elapsed() {
    let app = TestApp::new().await;
    app.create_admin().await;
    let target_id = app
        .create_user_with_role("zero@example.com", "grove-Lantern41", "PATIENT")
        .await;
    let admin_token = app.login("admin@example.com", "admin123").await;

    let response = app
        .request(
            "POST",
            &format!("/api/admin/users/{target_id}/suspend"),
            Some(serde_json::json!({ "duration": 0, "unit": "HOURS" })),
            Some(&admin_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["remaining_seconds"], 0);

    // The end is in the past, so the account is enabled again immediately.
    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "zero@example.com",
                "password": "grove-Lantern41",
            })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);
}

#[tokio::test]
async fn test_suspend_unknown_user_is_not_found() {
    let app = TestApp::new().await;
    app.create_admin().await;
    let admin_token = app.login("admin@example.com", "admin123").await;

    let response = app
        .request(
            "POST",
            "/api/admin/users/999999/suspend",
            Some(serde_json::json!({ "duration": 1, "unit": "HOURS" })),
            Some(&admin_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["errorCode"], "NOT_FOUND");
}

#[tokio::test]
async fn test_admin_cannot_suspend_self() {
    let app = TestApp::new().await;
    let admin_id = app.create_admin().await;
    let admin_token = app.login("admin@example.com", "admin123").await;

    let response = app
        .request(
            "POST",
            &format!("/api/admin/users/{admin_id}/suspend"),
            Some(serde_json::json!({ "duration": 1, "unit": "DAYS" })),
            Some(&admin_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_sweeper_clears_only_expired_suspensions() {
    let app = TestApp::new().await;
    let expired_id = app
        .create_user_with_role("expired@example.com", "grove-Lantern41", "PATIENT")
        .await;
    let pending_id = app
        .create_user_with_role("pending@example.com", "grove-Lantern41", "PATIENT")
        .await;

    let now = Utc::now();
    app.user_repo
        .set_suspension_end(expired_id, Some(now - Duration::hours(1)))
        .await
        .unwrap();
    app.user_repo
        .set_suspension_end(pending_id, Some(now + Duration::hours(1)))
        .await
        .unwrap();

    let sweeper = SuspensionSweeper::new(Arc::clone(&app.user_repo));
    let report = sweeper.sweep(now).await.unwrap();

    assert_eq!(report.cleared, 1);
    assert_eq!(report.failed, 0);

    let expired = app.user_repo.find_by_id(expired_id).await.unwrap().unwrap();
    let pending = app.user_repo.find_by_id(pending_id).await.unwrap().unwrap();
    assert!(expired.suspension_end.is_none());
    assert!(pending.suspension_end.is_some());
}

#[tokio::test]
async fn test_enabled_check_does_not_depend_on_sweeper() {
    let app = TestApp::new().await;
    let user_id = app
        .create_user_with_role("stale@example.com", "grove-Lantern41", "PATIENT")
        .await;

    // Stale row: the suspension elapsed but no sweep has run.
    app.user_repo
        .set_suspension_end(user_id, Some(Utc::now() - Duration::minutes(5)))
        .await
        .unwrap();

    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "stale@example.com",
                "password": "grove-Lantern41",
            })),
            None,
        )
        .await;

    assert_eq!(login.status, StatusCode::OK);
}
