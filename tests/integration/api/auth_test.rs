//! Authentication API integration tests
//!
//! Registration, login, token refresh, identity lookup and user search.

use crate::common::auth_helpers::{create_test_user, TEST_SECRET};
use crate::common::server::TestServer;
use crate::{assert_ok, assert_status};
use callrelay::backend::auth::sessions::verify_token;
use serde_json::{json, Value};

async fn register(server: &TestServer, username: &str) -> reqwest::Response {
    server
        .http
        .post(server.url("/api/auth/register"))
        .json(&json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "password": "password123",
        }))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_register_success() {
    let server = TestServer::spawn().await;

    let response = register(&server, "alice").await;
    assert_status!(response, 201);

    let body: Value = response.json().await.unwrap();
    assert!(body["message"].is_string());
    let user_id = body["user_id"].as_str().unwrap();
    assert_ok!(uuid::Uuid::parse_str(user_id));
}

#[tokio::test]
async fn test_register_duplicate_is_conflict() {
    let server = TestServer::spawn().await;

    assert_status!(register(&server, "alice").await, 201);
    let response = register(&server, "alice").await;
    assert_status!(response, 409);

    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
    assert_eq!(body["status"], 409);
}

#[tokio::test]
async fn test_register_validation() {
    let server = TestServer::spawn().await;

    let response = server
        .http
        .post(server.url("/api/auth/register"))
        .json(&json!({"username": "bob", "email": "bob-at-example", "password": "password123"}))
        .send()
        .await
        .unwrap();
    assert_status!(response, 400);

    let response = server
        .http
        .post(server.url("/api/auth/register"))
        .json(&json!({"username": "bob", "email": "bob@example.com", "password": "short"}))
        .send()
        .await
        .unwrap();
    assert_status!(response, 400);
}

#[tokio::test]
async fn test_login_and_identity() {
    let server = TestServer::spawn().await;
    let registered: Value = register(&server, "alice").await.json().await.unwrap();

    let response = server
        .http
        .post(server.url("/api/auth/login"))
        .json(&json!({"login": "alice@example.com", "password": "password123"}))
        .send()
        .await
        .unwrap();
    assert_status!(response, 200);
    let token = response.json::<Value>().await.unwrap()["token"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server
        .http
        .get(server.url("/api/user/id"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_status!(response, 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["userID"], registered["user_id"]);
    assert!(body.get("user_id").is_none());
}

#[tokio::test]
async fn test_login_wrong_password_is_unauthorized() {
    let server = TestServer::spawn().await;
    register(&server, "alice").await;

    let response = server
        .http
        .post(server.url("/api/auth/login"))
        .json(&json!({"login": "alice", "password": "wrong-password"}))
        .send()
        .await
        .unwrap();
    assert_status!(response, 401);
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let server = TestServer::spawn().await;

    let response = server.http.get(server.url("/api/user/id")).send().await.unwrap();
    assert_status!(response, 401);

    let response = server
        .http
        .get(server.url("/api/user/id"))
        .bearer_auth("not-a-token")
        .send()
        .await
        .unwrap();
    assert_status!(response, 401);
}

#[tokio::test]
async fn test_refresh_desktop_gets_long_lived_token() {
    let server = TestServer::spawn().await;
    let user = create_test_user(&server.state.pool, "alice").await;

    let response = server
        .http
        .post(server.url("/api/auth/refresh"))
        .bearer_auth(&user.token)
        .header("X-Client-Type", "desktop")
        .send()
        .await
        .unwrap();
    assert_status!(response, 200);

    let token = response.json::<Value>().await.unwrap()["token"]
        .as_str()
        .unwrap()
        .to_string();
    let claims = verify_token(&token, TEST_SECRET).unwrap();
    assert_eq!(claims.row_id().unwrap(), user.row_id);
    assert_eq!(claims.exp - claims.iat, 30 * 24 * 60 * 60);
}

#[tokio::test]
async fn test_search_excludes_caller() {
    let server = TestServer::spawn().await;
    let alice = create_test_user(&server.state.pool, "alice").await;
    create_test_user(&server.state.pool, "alina").await;
    create_test_user(&server.state.pool, "bob").await;

    let response = server
        .http
        .get(server.url("/api/users/search?q=ali"))
        .bearer_auth(&alice.token)
        .send()
        .await
        .unwrap();
    assert_status!(response, 200);

    let body: Value = response.json().await.unwrap();
    let names: Vec<&str> = body["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["username"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["alina"]);
}
