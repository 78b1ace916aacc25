//! Integration tests for the caller profile.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_me_returns_caller_profile() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_user("alice").await;

    let response = app.request("GET", "/api/me", None, Some(&alice.token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["id"], alice.id.to_string());
    assert_eq!(response.body["data"]["name"], "alice");
    assert_eq!(response.body["data"]["email"], "alice@example.com");
}

#[tokio::test]
async fn test_me_requires_auth() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/me", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHENTICATED");

    let response = app
        .request("GET", "/api/me", None, Some("not-a-token"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
