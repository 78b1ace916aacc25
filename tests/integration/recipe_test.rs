//! Integration tests for recipe mutations.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_create_recipe() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_user("alice").await;
    let category_id = app.category_id("Dessert").await;

    let response = app
        .request(
            "POST",
            "/api/recipes",
            Some(serde_json::json!({
                "title": "  Cake  ",
                "content": "Bake it",
                "categoryId": category_id,
                "isPublic": true,
            })),
            Some(&alice.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["title"], "Cake");
    assert_eq!(response.body["data"]["visibility"], "PUBLIC");
    assert_eq!(response.body["data"]["ownerId"], alice.id.to_string());
}

#[tokio::test]
async fn test_create_recipe_requires_auth() {
    let app = helpers::TestApp::new().await;
    let category_id = app.category_id("Food").await;

    let body = serde_json::json!({
        "title": "Soup",
        "content": "Boil",
        "categoryId": category_id,
        "isPublic": true,
    });
    let response = app
        .request("POST", "/api/recipes", Some(body.clone()), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHENTICATED");

    let response = app
        .request("POST", "/api/recipes", Some(body), Some("not-a-token"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_recipe_validation() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_user("alice").await;
    let category_id = app.category_id("Food").await;

    let response = app
        .request(
            "POST",
            "/api/recipes",
            Some(serde_json::json!({
                "title": "   ",
                "content": "Boil",
                "categoryId": category_id,
            })),
            Some(&alice.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Title and content are required");

    let response = app
        .request(
            "POST",
            "/api/recipes",
            Some(serde_json::json!({
                "title": "Soup",
                "content": "Boil",
            })),
            Some(&alice.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Please select a category");

    let response = app
        .request(
            "POST",
            "/api/recipes",
            Some(serde_json::json!({
                "title": "Soup",
                "content": "Boil",
                "categoryId": uuid::Uuid::new_v4(),
            })),
            Some(&alice.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_recipe_body() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_user("alice").await;
    let category_id = app.category_id("Food").await;
    let missing_title = serde_json::json!({
        "content": "Boil",
        "categoryId": category_id,
    });

    let response = app
        .request("POST", "/api/recipes", Some(missing_title.clone()), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHENTICATED");

    let response = app
        .request(
            "POST",
            "/api/recipes",
            Some(missing_title),
            Some(&alice.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION");
    assert!(response.body["message"].as_str().unwrap().contains("title"));

    let id = app.create_recipe(&alice, "Soup", true).await;
    let response = app
        .request(
            "PUT",
            &format!("/api/recipes/{id}"),
            Some(serde_json::json!({"title": 7, "content": "Boil"})),
            Some(&alice.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION");

    let response = app
        .request(
            "POST",
            "/api/categories",
            Some(serde_json::json!({"label": "Snacks"})),
            Some(&alice.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION");
}

#[tokio::test]
async fn test_update_recipe_owner_only() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_user("alice").await;
    let bob = app.create_user("bob").await;
    let id = app.create_recipe(&alice, "Soup", true).await;
    let category_id = app.category_id("Drinks").await;

    let update = serde_json::json!({
        "title": "Broth",
        "content": "Simmer",
        "categoryId": category_id,
        "isPublic": false,
    });

    let response = app
        .request(
            "PUT",
            &format!("/api/recipes/{id}"),
            Some(update.clone()),
            Some(&bob.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let unchanged = app
        .request("GET", &format!("/api/recipes/{id}"), None, None)
        .await;
    assert_eq!(unchanged.body["data"]["title"], "Soup");

    let response = app
        .request(
            "PUT",
            &format!("/api/recipes/{id}"),
            Some(update),
            Some(&alice.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["title"], "Broth");
    assert_eq!(response.body["data"]["visibility"], "PRIVATE");
    assert_eq!(response.body["data"]["categoryId"], category_id.to_string());
}

#[tokio::test]
async fn test_delete_recipe() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_user("alice").await;
    let bob = app.create_user("bob").await;
    let id = app.create_recipe(&alice, "Soup", true).await;

    let response = app
        .request("DELETE", &format!("/api/recipes/{id}"), None, Some(&bob.token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "DELETE",
            &format!("/api/recipes/{id}"),
            None,
            Some(&alice.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", &format!("/api/recipes/{id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "DELETE",
            &format!("/api/recipes/{id}"),
            None,
            Some(&alice.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_toggle_visibility() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_user("alice").await;
    let bob = app.create_user("bob").await;
    let id = app.create_recipe(&alice, "Soup", true).await;

    let response = app
        .request(
            "POST",
            &format!("/api/recipes/{id}/visibility"),
            None,
            Some(&bob.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "POST",
            &format!("/api/recipes/{id}/visibility"),
            None,
            Some(&alice.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["visibility"], "PRIVATE");

    let response = app
        .request("GET", &format!("/api/recipes/{id}"), None, Some(&alice.token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_toggle_favorite_twice_restores_state() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_user("alice").await;
    let bob = app.create_user("bob").await;
    let id = app.create_recipe(&alice, "Soup", false).await;

    let response = app
        .request(
            "POST",
            &format!("/api/recipes/{id}/favorite"),
            None,
            Some(&bob.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["favorited"], true);
    assert_eq!(app.store.favorite_rows(id).await, 1);

    let favorites = app
        .request("GET", "/api/recipes/favorites", None, Some(&bob.token))
        .await;
    assert_eq!(favorites.titles(), vec!["Soup"]);

    let response = app
        .request(
            "POST",
            &format!("/api/recipes/{id}/favorite"),
            None,
            Some(&bob.token),
        )
        .await;
    assert_eq!(response.body["data"]["favorited"], false);
    assert_eq!(app.store.favorite_rows(id).await, 0);
}

#[tokio::test]
async fn test_mutations_on_missing_recipe() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_user("alice").await;
    let missing = uuid::Uuid::new_v4();

    for path in [
        format!("/api/recipes/{missing}/visibility"),
        format!("/api/recipes/{missing}/favorite"),
        "/api/recipes/not-a-uuid/favorite".to_string(),
    ] {
        let response = app.request("POST", &path, None, Some(&alice.token)).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
    }
}
