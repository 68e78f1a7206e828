//! Integration tests for API endpoints.
//!
//! These tests drive the full router over the in-memory store, so no
//! MongoDB instance is needed.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use saas_starter::api::{create_router, AppState};
use saas_starter::domain::{EntityKind, SaltedSha256};
use saas_starter::infra::{DocumentStore, MemoryStore};

// =============================================================================
// Test Helpers
// =============================================================================

fn app_with_store() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let handle: Arc<dyn DocumentStore> = store.clone();
    let state = AppState::from_store(Some(handle), Arc::new(SaltedSha256));
    (create_router(state), store)
}

fn app_without_store() -> Router {
    create_router(AppState::from_store(None, Arc::new(SaltedSha256)))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
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
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

async fn register(app: &Router, name: &str, email: &str, password: &str) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        "/api/auth/register",
        Some(json!({ "name": name, "email": email, "password": password })),
    )
    .await
}

async fn login(app: &Router, email: &str, password: &str) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        "/api/auth/login",
        Some(json!({ "email": email, "password": password })),
    )
    .await
}

fn post_body(title: &str, published: Option<bool>) -> Value {
    let mut body = json!({
        "title": title,
        "slug": title.to_lowercase(),
        "content": "C",
        "author": "Au",
    });
    if let Some(published) = published {
        body["published"] = json!(published);
    }
    body
}

// =============================================================================
// Root Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_root_endpoint_returns_message() {
    let (app, _) = app_with_store();
    let (status, body) = send(&app, Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "SaaS Backend Running" }));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (app, _) = app_with_store();
    let (status, body) = send(&app, Method::GET, "/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "SaaS Starter API");
}

// =============================================================================
// Auth Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_register_then_login_round_trip() {
    let (app, _) = app_with_store();

    let (status, registered) = register(&app, "A", "a@x.com", "pw1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(registered["name"], "A");
    assert_eq!(registered["email"], "a@x.com");
    assert!(!registered["id"].as_str().unwrap().is_empty());
    assert!(registered.get("password").is_none());
    assert!(registered.get("password_hash").is_none());

    let (status, logged_in) = login(&app, "a@x.com", "pw1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(logged_in, registered);

    let (status, body) = login(&app, "a@x.com", "wrong").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
    assert_eq!(body["error"]["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_unknown_email_is_unauthorized() {
    let (app, _) = app_with_store();
    let (status, _) = login(&app, "nobody@x.com", "pw1").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_duplicate_registration_creates_separate_users() {
    let (app, store) = app_with_store();

    let (_, first) = register(&app, "A", "a@x.com", "pw1").await;
    let (status, second) = register(&app, "A2", "a@x.com", "pw2").await;

    assert_eq!(status, StatusCode::OK);
    assert_ne!(first["id"], second["id"]);
    assert_eq!(store.documents(EntityKind::User).await.len(), 2);
}

#[tokio::test]
async fn test_stored_user_has_salted_hash() {
    let (app, store) = app_with_store();
    register(&app, "A", "a@x.com", "pw1").await;

    let users = store.documents(EntityKind::User).await;
    let hash = users[0].get_str("password_hash").unwrap();
    let (salt, digest) = hash.split_once('$').unwrap();

    assert_eq!(hash.matches('$').count(), 1);
    assert_eq!(salt.len(), 16);
    assert_eq!(digest, SaltedSha256::digest(salt, "pw1"));
    assert!(users[0].get_bool("is_active").unwrap());
    assert!(users[0].get_datetime("created_at").is_ok());
}

#[tokio::test]
async fn test_register_rejects_invalid_email() {
    let (app, store) = app_with_store();
    let (status, body) = register(&app, "A", "not-an-email", "pw1").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(store.documents(EntityKind::User).await.is_empty());
}

#[tokio::test]
async fn test_register_rejects_missing_field() {
    let (app, _) = app_with_store();
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        Some(json!({ "name": "A", "email": "a@x.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

// =============================================================================
// Blog Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_blog_post_published_defaults_to_true() {
    let (app, store) = app_with_store();

    let (status, created) = send(&app, Method::POST, "/api/blog", Some(post_body("T", None))).await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_str().unwrap().to_string();

    let posts = store.documents(EntityKind::BlogPost).await;
    assert!(posts[0].get_bool("published").unwrap());

    let (status, listed) = send(&app, Method::GET, "/api/blog", None).await;
    assert_eq!(status, StatusCode::OK);
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], id);
    assert_eq!(listed[0]["title"], "T");
    assert_eq!(listed[0]["excerpt"], Value::Null);
    assert!(listed[0].get("_id").is_none());
    assert!(listed[0]["created_at"].is_string());
}

#[tokio::test]
async fn test_unpublished_post_is_not_listed() {
    let (app, _) = app_with_store();

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/blog",
        Some(post_body("T", Some(false))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(!created["id"].as_str().unwrap().is_empty());

    let (_, listed) = send(&app, Method::GET, "/api/blog", None).await;
    assert!(listed
        .as_array()
        .unwrap()
        .iter()
        .all(|post| post["id"] != created["id"]));
}

#[tokio::test]
async fn test_blog_listing_is_capped_at_twenty() {
    let (app, _) = app_with_store();

    for i in 0..25 {
        let title = format!("Post{}", i);
        send(&app, Method::POST, "/api/blog", Some(post_body(&title, Some(true)))).await;
    }
    send(&app, Method::POST, "/api/blog", Some(post_body("Hidden", Some(false)))).await;

    let (status, listed) = send(&app, Method::GET, "/api/blog", None).await;
    let listed = listed.as_array().unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.len(), 20);
    assert!(listed.iter().all(|post| post["published"] == true));
}

// =============================================================================
// Contact Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_contact_submission_is_received() {
    let (app, store) = app_with_store();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/contact",
        Some(json!({ "name": "N", "email": "n@x.com", "message": "hi" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "received");
    assert!(!body["id"].as_str().unwrap().is_empty());

    let messages = store.documents(EntityKind::ContactMessage).await;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].get_str("message").unwrap(), "hi");
}

#[tokio::test]
async fn test_contact_with_topic() {
    let (app, store) = app_with_store();

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/contact",
        Some(json!({ "name": "N", "email": "n@x.com", "topic": "Sales", "message": "hi" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let messages = store.documents(EntityKind::ContactMessage).await;
    assert_eq!(messages[0].get_str("topic").unwrap(), "Sales");
}

// =============================================================================
// Diagnostics Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_diagnostics_with_store() {
    let (app, _) = app_with_store();
    register(&app, "A", "a@x.com", "pw1").await;

    let (status, body) = send(&app, Method::GET, "/test", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database"], "✅ Connected & Working");
    assert_eq!(body["connection_status"], "Connected");
    assert_eq!(body["collections"], json!(["user"]));
}

#[tokio::test]
async fn test_diagnostics_without_store() {
    let app = app_without_store();
    let (status, body) = send(&app, Method::GET, "/test", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "❌ Not Available");
    assert_eq!(body["connection_status"], "Not Connected");
    assert_eq!(body["collections"], json!([]));
}

// =============================================================================
// Store Failure Tests
// =============================================================================

#[tokio::test]
async fn test_store_failure_is_reported_as_bad_request() {
    let app = app_without_store();

    let (status, body) = register(&app, "A", "a@x.com", "pw1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "STORE_ERROR");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .starts_with("Database not available"));

    let (status, _) = login(&app, "a@x.com", "pw1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::GET, "/api/blog", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/contact",
        Some(json!({ "name": "N", "email": "n@x.com", "message": "hi" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// CORS Tests
// =============================================================================

#[tokio::test]
async fn test_cors_preflight_is_fully_open() {
    let (app, _) = app_with_store();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/contact")
        .header(header::ORIGIN, "https://app.example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type,x-custom")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let headers = response.headers();

    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://app.example.com"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST");
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
        "content-type,x-custom"
    );
}
