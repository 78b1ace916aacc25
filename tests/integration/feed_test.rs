//! Integration tests for recipe listings.

mod helpers;

use axum::http::StatusCode;

use recipebox_database::RecipeStore;
use recipebox_entity::recipe::{NewRecipe, Visibility};

#[tokio::test]
async fn test_public_feed_excludes_private() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_user("alice").await;
    app.create_recipe(&alice, "Soup", true).await;
    app.create_recipe(&alice, "Secret Soup", false).await;
    app.create_recipe(&alice, "Salad", true).await;

    for path in [
        "/api/recipes/public",
        "/api/recipes/public?sort=popular",
        "/api/recipes/public?q=soup",
        "/api/recipes/public?page=2",
        "/api/recipes/recent",
        "/api/recipes/popular",
    ] {
        let response = app.request("GET", path, None, Some(&alice.token)).await;
        assert_eq!(response.status, StatusCode::OK, "{path}");
        assert!(
            !response.titles().contains(&"Secret Soup".to_string()),
            "{path}"
        );
    }

    let response = app.request("GET", "/api/recipes/public", None, None).await;
    assert_eq!(response.titles(), vec!["Salad", "Soup"]);
    assert_eq!(response.body["data"]["totalItems"], 2);
    assert_eq!(response.body["data"]["page"], 1);
    assert_eq!(response.body["data"]["hasNext"], false);
}

#[tokio::test]
async fn test_page_past_the_end_is_empty() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_user("alice").await;
    app.create_recipe(&alice, "Soup", true).await;

    for path in [
        "/api/recipes/public?page=9223372036854775807",
        "/api/recipes/public?page=9223372036854775807&sort=popular&q=soup",
        "/api/recipes/mine?page=9223372036854775807",
    ] {
        let response = app.request("GET", path, None, Some(&alice.token)).await;
        assert_eq!(response.status, StatusCode::OK, "{path}");
        assert!(response.titles().is_empty(), "{path}");
        assert_eq!(response.body["data"]["totalItems"], 1, "{path}");
        assert_eq!(response.body["data"]["totalPages"], 1, "{path}");
        assert_eq!(response.body["data"]["hasNext"], false, "{path}");
    }
}

#[tokio::test]
async fn test_search_case_insensitive() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_user("alice").await;
    app.create_recipe(&alice, "Tomato SOUP", true).await;
    app.create_recipe(&alice, "Salad", true).await;

    let response = app
        .request("GET", "/api/recipes/public?q=soup", None, None)
        .await;
    assert_eq!(response.titles(), vec!["Tomato SOUP"]);

    let response = app
        .request("GET", "/api/recipes/public?q=%20%20", None, None)
        .await;
    assert_eq!(response.titles().len(), 2);
}

#[tokio::test]
async fn test_popular_sort_by_likes() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_user("alice").await;
    let mut fans = Vec::new();
    for i in 0..5 {
        fans.push(app.create_user(&format!("fan{i}")).await);
    }

    for (title, likes) in [("Five", 5), ("One", 1), ("Three", 3)] {
        let id = app.create_recipe(&alice, title, true).await;
        for fan in fans.iter().take(likes) {
            app.request(
                "POST",
                &format!("/api/recipes/{id}/like"),
                None,
                Some(&fan.token),
            )
            .await;
        }
    }

    let popular = app
        .request("GET", "/api/recipes/public?sort=popular", None, None)
        .await;
    assert_eq!(popular.titles(), vec!["Five", "Three", "One"]);

    let recent = app
        .request("GET", "/api/recipes/public?sort=bogus", None, None)
        .await;
    assert_eq!(recent.titles(), vec!["Three", "One", "Five"]);

    let top = app
        .request("GET", "/api/recipes/popular?limit=2", None, None)
        .await;
    assert_eq!(top.titles(), vec!["Five", "Three"]);
}

#[tokio::test]
async fn test_feed_overlays_for_viewer() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_user("alice").await;
    let bob = app.create_user("bob").await;
    let id = app.create_recipe(&alice, "Soup", true).await;

    app.request("POST", &format!("/api/recipes/{id}/like"), None, Some(&bob.token))
        .await;

    let as_bob = app
        .request("GET", "/api/recipes/public", None, Some(&bob.token))
        .await;
    let card = &as_bob.body["data"]["items"][0];
    assert_eq!(card["likedByMe"], true);
    assert_eq!(card["likesCount"], 1);
    assert_eq!(card["categoryName"], "Food");

    let anon = app.request("GET", "/api/recipes/public", None, None).await;
    assert_eq!(anon.body["data"]["items"][0]["likedByMe"], false);
}

#[tokio::test]
async fn test_cached_page_until_mutation() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_user("alice").await;
    app.create_recipe(&alice, "Soup", true).await;

    let first = app.request("GET", "/api/recipes/public", None, None).await;
    assert_eq!(first.titles(), vec!["Soup"]);

    // Bypasses the services, so nothing invalidates the cached page.
    app.store
        .insert_recipe(NewRecipe {
            owner_id: alice.id,
            category_id: app.category_id("Food").await,
            title: "Stew".into(),
            content: "Slow".into(),
            visibility: Visibility::Public,
        })
        .await
        .unwrap();

    let cached = app.request("GET", "/api/recipes/public", None, None).await;
    assert_eq!(cached.titles(), vec!["Soup"]);

    app.create_recipe(&alice, "Salad", true).await;
    let fresh = app.request("GET", "/api/recipes/public", None, None).await;
    assert_eq!(fresh.titles(), vec!["Salad", "Stew", "Soup"]);
}

#[tokio::test]
async fn test_mine_and_favorites_require_auth() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_user("alice").await;
    app.create_recipe(&alice, "Soup", false).await;
    app.create_recipe(&alice, "Salad", true).await;

    for path in ["/api/recipes/mine", "/api/recipes/favorites"] {
        let response = app.request("GET", path, None, None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{path}");
    }

    let mine = app
        .request("GET", "/api/recipes/mine", None, Some(&alice.token))
        .await;
    assert_eq!(mine.status, StatusCode::OK);
    assert_eq!(mine.titles(), vec!["Salad", "Soup"]);

    let searched = app
        .request("GET", "/api/recipes/mine?q=SOUP", None, Some(&alice.token))
        .await;
    assert_eq!(searched.titles(), vec!["Soup"]);
}

#[tokio::test]
async fn test_recipe_detail() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_user("alice").await;
    let id = app.create_recipe(&alice, "Soup", true).await;
    app.store.attach_tag(id, "warm").await;

    let response = app
        .request("GET", &format!("/api/recipes/{id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["ownerName"], "alice");
    assert_eq!(response.body["data"]["tags"], serde_json::json!(["warm"]));

    let response = app.request("GET", "/api/recipes/garbage", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
