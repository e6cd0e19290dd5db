//! Friend API integration tests

use crate::assert_status;
use crate::common::auth_helpers::create_test_user;
use crate::common::server::TestServer;
use serde_json::{json, Value};

#[tokio::test]
async fn test_add_list_remove_friend() {
    let server = TestServer::spawn().await;
    let alice = create_test_user(&server.state.pool, "alice").await;
    let bob = create_test_user(&server.state.pool, "bob").await;

    let response = server
        .http
        .post(server.url("/api/friends/add"))
        .bearer_auth(&alice.token)
        .json(&json!({"friend_username": "bob"}))
        .send()
        .await
        .unwrap();
    assert_status!(response, 200);

    // Bob sees the link even though Alice created it
    let response = server
        .http
        .get(server.url("/api/friends"))
        .bearer_auth(&bob.token)
        .send()
        .await
        .unwrap();
    assert_status!(response, 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body["friends"],
        json!([{"user_id": alice.identity.as_str(), "username": "alice"}])
    );

    let response = server
        .http
        .delete(server.url(&format!("/api/friends/{}", alice.identity)))
        .bearer_auth(&bob.token)
        .send()
        .await
        .unwrap();
    assert_status!(response, 200);

    let body: Value = server
        .http
        .get(server.url("/api/friends"))
        .bearer_auth(&alice.token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["friends"], json!([]));
}

#[tokio::test]
async fn test_add_friend_errors() {
    let server = TestServer::spawn().await;
    let alice = create_test_user(&server.state.pool, "alice").await;
    let bob = create_test_user(&server.state.pool, "bob").await;

    let add = |token: String, name: &'static str| {
        let request = server
            .http
            .post(server.url("/api/friends/add"))
            .bearer_auth(token)
            .json(&json!({"friend_username": name}));
        async move { request.send().await.unwrap() }
    };

    assert_status!(add(alice.token.clone(), "nobody").await, 404);
    assert_status!(add(alice.token.clone(), "alice").await, 400);
    assert_status!(add(alice.token.clone(), "bob").await, 200);
    assert_status!(add(alice.token.clone(), "bob").await, 409);
    assert_status!(add(bob.token.clone(), "alice").await, 409);
}

#[tokio::test]
async fn test_friends_requires_authentication() {
    let server = TestServer::spawn().await;
    let response = server.http.get(server.url("/api/friends")).send().await.unwrap();
    assert_status!(response, 401);
}
