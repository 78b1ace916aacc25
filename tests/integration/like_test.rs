//! Integration tests for the like endpoint.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_like_toggle_round_trip() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_user("alice").await;
    let bob = app.create_user("bob").await;
    let id = app.create_recipe(&alice, "Soup", true).await;

    let response = app
        .request("POST", &format!("/api/recipes/{id}/like"), None, Some(&bob.token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        serde_json::json!({"liked": true, "likesCount": 1})
    );

    let response = app
        .request("POST", &format!("/api/recipes/{id}/like"), None, Some(&bob.token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        serde_json::json!({"liked": false, "likesCount": 0})
    );
}

#[tokio::test]
async fn test_like_counts_every_user() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_user("alice").await;
    let id = app.create_recipe(&alice, "Soup", true).await;

    for (i, name) in ["bob", "carol", "dave"].iter().enumerate() {
        let user = app.create_user(name).await;
        let response = app
            .request("POST", &format!("/api/recipes/{id}/like"), None, Some(&user.token))
            .await;
        assert_eq!(response.body["likesCount"], (i + 1) as i64);
    }

    let detail = app
        .request("GET", &format!("/api/recipes/{id}"), None, None)
        .await;
    assert_eq!(detail.body["data"]["likesCount"], 3);
    assert_eq!(detail.body["data"]["likedByMe"], false);
}

#[tokio::test]
async fn test_like_requires_auth() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_user("alice").await;
    let id = app.create_recipe(&alice, "Soup", true).await;

    let response = app
        .request("POST", &format!("/api/recipes/{id}/like"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.body.get("error").is_some());
    assert_eq!(app.store.like_rows(id).await, 0);
}

#[tokio::test]
async fn test_like_private_recipe_not_found() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_user("alice").await;
    let bob = app.create_user("bob").await;
    let id = app.create_recipe(&alice, "Secret", false).await;

    for user in [&alice, &bob] {
        let response = app
            .request("POST", &format!("/api/recipes/{id}/like"), None, Some(&user.token))
            .await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert!(response.body.get("error").is_some());
    }
    assert_eq!(app.store.like_rows(id).await, 0);
}

#[tokio::test]
async fn test_like_malformed_or_missing_id() {
    let app = helpers::TestApp::new().await;
    let bob = app.create_user("bob").await;

    let response = app
        .request("POST", "/api/recipes/12345/like", None, Some(&bob.token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "POST",
            &format!("/api/recipes/{}/like", uuid::Uuid::new_v4()),
            None,
            Some(&bob.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
