//! Integration tests for the REST API.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use domain::DomainError;
use gateway_lib::config::GatewayConfig;
use registry_service_lib::service::{
    MockProductService, MockUserService, ProductManager, UserManager,
};

// =============================================================================
// Helpers
// =============================================================================

fn test_app() -> Router {
    gateway_lib::app(
        Arc::new(UserManager::new()),
        Arc::new(ProductManager::new()),
        GatewayConfig::default(),
    )
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

async fn create_user(app: &Router, username: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/users",
        Some(json!({
            "username": username,
            "email": format!("{}@example.com", username),
            "full_name": format!("{} Example", username),
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

async fn create_product(app: &Router, name: &str, category: &str, price: f64) {
    let (status, _) = send(
        app,
        Method::POST,
        "/api/v1/products",
        Some(json!({
            "name": name,
            "description": format!("{} description", name),
            "price": price,
            "quantity": 1,
            "category": category,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health() {
    let (status, body) = send(&test_app(), Method::GET, "/api/v1/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok", "message": "Server is running"}));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (status, body) = send(&test_app(), Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/v1/users"].is_object());
}

// =============================================================================
// Users
// =============================================================================

#[tokio::test]
async fn test_create_user() {
    let body = create_user(&test_app(), "alice").await;

    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["id"], "1");
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["is_active"], true);
    assert_eq!(body["message"], "User created successfully");
}

#[tokio::test]
async fn test_create_user_invalid_email() {
    let (status, body) = send(
        &test_app(),
        Method::POST,
        "/api/v1/users",
        Some(json!({"username": "alice", "email": "not-an-email", "full_name": "Alice"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_FAILED");
    assert_eq!(body["error"]["message"], "Invalid email format");
}

#[tokio::test]
async fn test_create_user_missing_fields() {
    let (status, body) = send(
        &test_app(),
        Method::POST,
        "/api/v1/users",
        Some(json!({"email": "alice@example.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["message"],
        "username, email, and full_name are required"
    );
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/users")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_user_conflicts() {
    let app = test_app();
    create_user(&app, "alice").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/users",
        Some(json!({"username": "alice", "email": "other@example.com", "full_name": "A"})),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "ALREADY_EXISTS");
}

#[tokio::test]
async fn test_get_update_delete_user() {
    let app = test_app();
    create_user(&app, "alice").await;

    let (status, body) = send(&app, Method::GET, "/api/v1/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "alice@example.com");

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/users/1",
        Some(json!({"full_name": "Alice Liddell", "is_active": false})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["full_name"], "Alice Liddell");
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["is_active"], false);

    let (status, body) = send(&app, Method::DELETE, "/api/v1/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body.get("user").is_none());

    let (status, body) = send(&app, Method::GET, "/api/v1/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_update_stores_email_without_format_check() {
    let app = test_app();
    create_user(&app, "alice").await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/users/1",
        Some(json!({"email": "nope"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "nope");
    assert_eq!(body["user"]["username"], "alice");
}

#[tokio::test]
async fn test_list_users_paging_and_sorting() {
    let app = test_app();
    for name in ["carol", "alice", "bob", "dave", "erin"] {
        create_user(&app, name).await;
    }

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/users?page=2&page_size=2&sort_by=username",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["username"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["carol", "dave"]);
    assert_eq!(body["total_count"], 5);
    assert_eq!(body["page"], 2);
    assert_eq!(body["page_size"], 2);
    assert_eq!(body["message"], "Users retrieved successfully");
}

#[tokio::test]
async fn test_list_users_defaults_and_empty_filter() {
    let app = test_app();
    create_user(&app, "alice").await;
    create_user(&app, "bob").await;

    let (_, body) = send(&app, Method::GET, "/api/v1/users?filter=&page=abc", None).await;
    assert_eq!(body["total_count"], 2);
    assert_eq!(body["page"], 1);
    assert_eq!(body["page_size"], 10);

    let (_, body) = send(&app, Method::GET, "/api/v1/users?filter=ALI", None).await;
    assert_eq!(body["total_count"], 1);
    assert_eq!(body["users"][0]["username"], "alice");
}

// =============================================================================
// Products
// =============================================================================

#[tokio::test]
async fn test_create_product_rejects_negative_price() {
    let (status, body) = send(
        &test_app(),
        Method::POST,
        "/api/v1/products",
        Some(json!({
            "name": "Lamp",
            "description": "desk lamp",
            "price": -1.0,
            "quantity": 1,
            "category": "Home",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "price must be non-negative");
}

#[tokio::test]
async fn test_get_product() {
    let app = test_app();
    create_product(&app, "Lamp", "Home", 20.0).await;

    let (status, body) = send(&app, Method::GET, "/api/v1/products/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product"]["name"], "Lamp");
    assert_eq!(body["product"]["price"], 20.0);

    let (status, _) = send(&app, Method::GET, "/api/v1/products/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_products() {
    let app = test_app();
    create_product(&app, "Product 1", "Books", 10.0).await;
    create_product(&app, "Product 2", "Electronics", 15.0).await;
    create_product(&app, "Product 3", "Electronics", 20.0).await;
    create_product(&app, "Product 4", "Books", 25.0).await;
    create_product(&app, "Product 5", "Garden", 30.0).await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/products/search?category=electronics&min_price=15&max_price=25",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Product 2", "Product 3"]);
    assert_eq!(body["total_count"], 2);
    assert_eq!(body["message"], "Products retrieved successfully");
}

// =============================================================================
// Error mapping with mocked services
// =============================================================================

#[tokio::test]
async fn test_internal_error_is_hidden() {
    let mut users = MockUserService::new();
    users
        .expect_list_users()
        .returning(|_| Err(DomainError::internal("user store lock poisoned")));

    let app = gateway_lib::app(
        Arc::new(users),
        Arc::new(MockProductService::new()),
        GatewayConfig::default(),
    );

    let (status, body) = send(&app, Method::GET, "/api/v1/users", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(body["error"]["message"], "An internal error occurred");
}

#[tokio::test]
async fn test_search_params_reach_service() {
    let mut products = MockProductService::new();
    products
        .expect_search_products()
        .withf(|query| {
            query.query.is_none()
                && query.category.as_deref() == Some("Books")
                && query.min_price == Some(5.0)
                && query.max_price.is_none()
                && query.page == 3
                && query.page_size == 0
        })
        .returning(|query| {
            Ok(domain::Page {
                items: Vec::new(),
                total: 0,
                page: query.page,
                page_size: 10,
            })
        });

    let app = gateway_lib::app(
        Arc::new(MockUserService::new()),
        Arc::new(products),
        GatewayConfig::default(),
    );

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/products/search?query=&category=Books&min_price=5&max_price=x&page=3",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 3);
    assert_eq!(body["page_size"], 10);
}
