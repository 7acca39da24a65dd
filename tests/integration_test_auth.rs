mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{TestApp, OWNER_OPEN_ID};
use estate_portal::error::LOGIN_REQUIRED;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_me_without_session_is_null() {
    let app = TestApp::new().await;

    let (status, body) = app.query("auth.me", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());
}

#[tokio::test]
async fn test_me_returns_known_user_and_refreshes_sign_in() {
    let app = TestApp::new().await;
    let cookie = app.login_as("user_owner", "owner").await;

    let before: chrono::DateTime<chrono::Utc> = sqlx::query_scalar("SELECT last_signed_in FROM users WHERE id = 'user_owner'")
        .fetch_one(app.pool())
        .await
        .unwrap();

    let (status, body) = app.query("auth.me", None, Some(&cookie)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "user_owner");
    assert_eq!(body["role"], "owner");

    let after: chrono::DateTime<chrono::Utc> = sqlx::query_scalar("SELECT last_signed_in FROM users WHERE id = 'user_owner'")
        .fetch_one(app.pool())
        .await
        .unwrap();
    assert!(after >= before);
}

#[tokio::test]
async fn test_unknown_user_is_provisioned_with_user_role() {
    let app = TestApp::new().await;
    let cookie = app.session_cookie("user_new");

    let (status, body) = app.query("auth.me", None, Some(&cookie)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "user_new");
    assert_eq!(body["role"], "user");
    assert_eq!(body["email"], "user_new@example.com");
    assert_eq!(body["loginMethod"], "oauth");
}

#[tokio::test]
async fn test_configured_owner_is_provisioned_as_admin() {
    let app = TestApp::new().await;
    let cookie = app.session_cookie(OWNER_OPEN_ID);

    let (_, body) = app.query("auth.me", None, Some(&cookie)).await;
    assert_eq!(body["role"], "admin");

    let (status, _) = app.query("admin.getAllUsers", None, Some(&cookie)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_sign_in_keeps_assigned_role() {
    let app = TestApp::new().await;
    let cookie = app.login_as("user_tenant", "tenant").await;

    app.query("auth.me", None, Some(&cookie)).await;
    let (_, body) = app.query("auth.me", None, Some(&cookie)).await;
    assert_eq!(body["role"], "tenant");
}

#[tokio::test]
async fn test_tampered_session_is_rejected() {
    let app = TestApp::new().await;
    let cookie = format!("{}x", app.login_as("user_admin", "admin").await);

    let (_, body) = app.query("auth.me", None, Some(&cookie)).await;
    assert!(body.is_null());

    let (status, body) = app.query("admin.getAllUsers", None, Some(&cookie)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], LOGIN_REQUIRED);
}

#[tokio::test]
async fn test_logout_clears_session_cookie() {
    let app = TestApp::new().await;
    let cookie = app.login_as("user_owner", "owner").await;

    let response = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/trpc/auth.logout")
            .header(header::COOKIE, &cookie)
            .body(Body::empty())
            .unwrap(),
    ).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response.headers()
        .get(header::SET_COOKIE)
        .expect("logout sets a removal cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("app_session_id="));
    assert!(set_cookie.contains("Max-Age=0"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "success": true }));
}

#[tokio::test]
async fn test_health_reports_database() {
    let app = TestApp::new().await;

    let (status, body) = app.query("system.health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true, "database": true }));

    let (status, body) = app.send(Request::builder().uri("/health").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
}
