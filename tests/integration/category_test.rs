//! Integration tests for the category catalog.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_list_categories_requires_auth() {
    let app = helpers::TestApp::new().await;

    for path in ["/api/categories", "/api/categories/available"] {
        let response = app.request("GET", path, None, None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{path}");
    }
}

#[tokio::test]
async fn test_default_categories_with_counts() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_user("alice").await;
    app.create_recipe(&alice, "Soup", false).await;

    let response = app
        .request("GET", "/api/categories", None, Some(&alice.token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let data = response.body["data"].as_array().unwrap();
    let names: Vec<_> = data.iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Dessert", "Drinks", "Food"]);
    assert_eq!(data[2]["recipeCount"], 1);
    assert_eq!(data[0]["recipeCount"], 0);

    let response = app
        .request("GET", "/api/categories/available", None, Some(&alice.token))
        .await;
    assert_eq!(response.body["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_create_category() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_user("alice").await;

    let response = app
        .request(
            "POST",
            "/api/categories",
            Some(serde_json::json!({"name": "  Soups  "})),
            Some(&alice.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["name"], "Soups");

    let response = app
        .request(
            "POST",
            "/api/categories",
            Some(serde_json::json!({"name": "Soups "})),
            Some(&alice.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "ALREADY_EXISTS");

    let response = app
        .request(
            "POST",
            "/api/categories",
            Some(serde_json::json!({"name": "soups"})),
            Some(&alice.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_category_validation() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_user("alice").await;

    for name in [String::new(), "   ".to_string(), "x".repeat(101)] {
        let response = app
            .request(
                "POST",
                "/api/categories",
                Some(serde_json::json!({ "name": name })),
                Some(&alice.token),
            )
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }

    let response = app
        .request(
            "POST",
            "/api/categories",
            Some(serde_json::json!({ "name": "x".repeat(100) })),
            Some(&alice.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_category_limit() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_user("alice").await;

    // Three defaults exist; 17 more reach the cap of 20.
    for i in 0..17 {
        let response = app
            .request(
                "POST",
                "/api/categories",
                Some(serde_json::json!({ "name": format!("Category {i}") })),
                Some(&alice.token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{i}");
    }

    let response = app
        .request(
            "POST",
            "/api/categories",
            Some(serde_json::json!({"name": "One too many"})),
            Some(&alice.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["error"], "LIMIT_EXCEEDED");

    let response = app
        .request("GET", "/api/categories", None, Some(&alice.token))
        .await;
    assert_eq!(response.body["data"].as_array().unwrap().len(), 20);
}

#[tokio::test]
async fn test_category_limit_from_empty_catalog() {
    let mut config = helpers::test_config();
    config.recipes.default_categories = Vec::new();
    let app = helpers::TestApp::with_config(config).await;
    let alice = app.create_user("alice").await;

    let mut statuses = Vec::new();
    for i in 0..21 {
        let response = app
            .request(
                "POST",
                "/api/categories",
                Some(serde_json::json!({ "name": format!("C{i:02}") })),
                Some(&alice.token),
            )
            .await;
        statuses.push(response.status);
    }

    assert!(statuses[..20].iter().all(|s| *s == StatusCode::CREATED));
    assert_eq!(statuses[20], StatusCode::UNPROCESSABLE_ENTITY);

    let response = app
        .request("GET", "/api/categories/available", None, Some(&alice.token))
        .await;
    assert_eq!(response.body["data"].as_array().unwrap().len(), 20);
}
