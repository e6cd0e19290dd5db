//! Room API integration tests

use crate::assert_status;
use crate::common::auth_helpers::create_test_user;
use crate::common::server::TestServer;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

#[tokio::test]
async fn test_create_list_delete_room() {
    let server = TestServer::spawn().await;
    let alice = create_test_user(&server.state.pool, "alice").await;

    let response = server
        .http
        .post(server.url("/api/rooms/create"))
        .bearer_auth(&alice.token)
        .json(&json!({"name": "standup"}))
        .send()
        .await
        .unwrap();
    assert_status!(response, 201);
    let created: Value = response.json().await.unwrap();
    assert_eq!(created["room"]["name"], "standup");
    assert_eq!(created["room"]["user_id"], alice.identity.as_str());
    let id = created["room"]["id"].as_i64().unwrap();

    let response = server
        .http
        .get(server.url("/api/rooms"))
        .bearer_auth(&alice.token)
        .send()
        .await
        .unwrap();
    assert_status!(response, 200);
    let listed: Value = response.json().await.unwrap();
    assert_eq!(listed["rooms"].as_array().unwrap().len(), 1);
    assert_eq!(listed["rooms"][0]["id"], id);

    let response = server
        .http
        .delete(server.url(&format!("/api/rooms/{id}")))
        .bearer_auth(&alice.token)
        .send()
        .await
        .unwrap();
    assert_status!(response, 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Room deleted");
}

#[tokio::test]
async fn test_room_name_length_is_enforced() {
    let server = TestServer::spawn().await;
    let alice = create_test_user(&server.state.pool, "alice").await;

    for name in ["ab".to_string(), "x".repeat(51)] {
        let response = server
            .http
            .post(server.url("/api/rooms/create"))
            .bearer_auth(&alice.token)
            .json(&json!({ "name": name }))
            .send()
            .await
            .unwrap();
        assert_status!(response, 400);
    }
}

#[tokio::test]
async fn test_rooms_are_private_to_their_owner() {
    let server = TestServer::spawn().await;
    let alice = create_test_user(&server.state.pool, "alice").await;
    let bob = create_test_user(&server.state.pool, "bob").await;

    let response = server
        .http
        .post(server.url("/api/rooms/create"))
        .bearer_auth(&alice.token)
        .json(&json!({"name": "lobby"}))
        .send()
        .await
        .unwrap();
    let id = response.json::<Value>().await.unwrap()["room"]["id"]
        .as_i64()
        .unwrap();

    let response = server
        .http
        .get(server.url("/api/rooms"))
        .bearer_auth(&bob.token)
        .send()
        .await
        .unwrap();
    let listed: Value = response.json().await.unwrap();
    assert_eq!(listed["rooms"], json!([]));

    let response = server
        .http
        .delete(server.url(&format!("/api/rooms/{id}")))
        .bearer_auth(&bob.token)
        .send()
        .await
        .unwrap();
    assert_status!(response, 404);

    let response = server
        .http
        .delete(server.url("/api/rooms/not-a-number"))
        .bearer_auth(&alice.token)
        .send()
        .await
        .unwrap();
    assert_status!(response, 400);
}

#[tokio::test]
async fn test_rooms_require_authentication() {
    let server = TestServer::spawn().await;

    let response = server.http.get(server.url("/api/rooms")).send().await.unwrap();
    assert_status!(response, 401);
}
