mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

use common::{ADMIN_EMAIL, send, test_app, token_for};

#[tokio::test]
async fn health_is_public() {
    let (status, body) = send("GET", "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, _) = send("GET", "/does-not-exist", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn profile_without_token_is_unauthorized() {
    let (status, body) = send("GET", "/profile", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "No token");
}

#[tokio::test]
async fn profile_with_invalid_token_is_forbidden() {
    let (status, body) = send("GET", "/profile", Some("not-a-jwt"), None).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Invalid token");
}

#[tokio::test]
async fn non_bearer_scheme_is_unauthorized() {
    let request = Request::builder()
        .uri("/cart")
        .header("Authorization", "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_signed_with_other_secret_is_forbidden() {
    let user = storefront_back::models::User {
        id: "u1".to_string(),
        email: "u1@example.com".to_string(),
        name: None,
        picture: None,
    };
    let forged = storefront_back::utils::jwt::generate_token(&user, "other", 3600).unwrap();

    let (status, _) = send("GET", "/cart", Some(&forged), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn cart_add_requires_session() {
    let body = json!({ "userId": "u1", "itemName": "Widget", "quantity": 2, "price": "₹100" });
    let (status, _) = send("POST", "/cart/add", None, Some(body)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn cart_add_rejects_spoofed_user_id() {
    let token = token_for("u1", "u1@example.com");
    let body = json!({ "userId": "u2", "itemName": "Widget", "quantity": 2, "price": "₹100" });
    let (status, _) = send("POST", "/cart/add", Some(&token), Some(body)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn cart_add_validates_before_touching_store() {
    let token = token_for("u1", "u1@example.com");

    let blank_name = json!({ "itemName": " ", "price": "₹100" });
    let (status, body) = send("POST", "/cart/add", Some(&token), Some(blank_name)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "itemName is required");

    let zero = json!({ "itemName": "Widget", "quantity": 0, "price": "₹100" });
    let (status, _) = send("POST", "/cart/add", Some(&token), Some(zero)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn another_users_cart_is_forbidden() {
    let token = token_for("u1", "u1@example.com");
    let (status, _) = send("GET", "/cart/u2", Some(&token), None).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn wishlist_checks_run_against_session_user() {
    let token = token_for("u1", "u1@example.com");

    let (status, _) = send("GET", "/wishlist/u2/Widget", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let spoofed = json!({ "userId": "u2", "itemName": "Widget" });
    let (status, _) = send("DELETE", "/wishlist/remove", Some(&token), Some(spoofed)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let missing_name = json!({ "userId": "u1" });
    let (status, body) = send("POST", "/wishlist/add", Some(&token), Some(missing_name)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields");
}

#[tokio::test]
async fn product_admin_requires_admin_email() {
    let body = json!({ "name": "Mouse", "price": 999, "image": "/m.png", "category": "Accessories" });

    let (status, _) = send("POST", "/products/add", None, Some(body.clone())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let shopper = token_for("u1", "u1@example.com");
    let (status, body_json) = send("POST", "/products/add", Some(&shopper), Some(body)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body_json["error"], "Admin access required");

    let (status, _) = send("DELETE", "/products/delete/1", Some(&shopper), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_product_create_checks_required_fields() {
    let admin = token_for("admin", ADMIN_EMAIL);
    let body = json!({ "name": "Mouse", "price": 999 });
    let (status, body) = send("POST", "/products/add", Some(&admin), Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields");
}

#[tokio::test]
async fn google_auth_requires_token() {
    let (status, body) = send("POST", "/auth/google", None, Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "token is required");
}

#[tokio::test]
async fn cors_preflight_allows_frontend_origin() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/cart/add")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:5173")
    );
}

#[tokio::test]
async fn cart_update_missing_quantity_is_bad_request() {
    let token = token_for("u1", "u1@example.com");
    let (status, body) = send("PUT", "/cart/update", Some(&token), Some(json!({ "itemId": 1 }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields");
}

#[tokio::test]
async fn non_numeric_cart_item_id_is_bad_request() {
    let token = token_for("u1", "u1@example.com");
    let (status, body) = send("DELETE", "/cart/remove/abc", Some(&token), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn mistyped_cart_quantity_is_bad_request() {
    let token = token_for("u1", "u1@example.com");
    let body = json!({ "itemName": "Widget", "quantity": "2", "price": "₹100" });
    let (status, body) = send("POST", "/cart/add", Some(&token), Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn malformed_json_body_answers_with_error_shape() {
    let token = token_for("u1", "u1@example.com");
    let request = Request::builder()
        .method("POST")
        .uri("/wishlist/add")
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = http_body_util::BodyExt::collect(response.into_body())
        .await
        .unwrap()
        .to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn non_numeric_product_id_is_bad_request() {
    let admin = token_for("admin", ADMIN_EMAIL);
    let (status, body) = send("DELETE", "/products/delete/first", Some(&admin), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}
