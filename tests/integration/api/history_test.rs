//! Chat history API integration tests

use crate::assert_status;
use crate::common::auth_helpers::create_test_user;
use crate::common::server::TestServer;
use callrelay::backend::relay::HistoryStore;
use callrelay::shared::RelayMessage;
use serde_json::Value;

#[tokio::test]
async fn test_history_requires_with_user() {
    let server = TestServer::spawn().await;
    let alice = create_test_user(&server.state.pool, "alice").await;

    let response = server
        .http
        .get(server.url("/api/chat/history"))
        .bearer_auth(&alice.token)
        .send()
        .await
        .unwrap();
    assert_status!(response, 400);
}

#[tokio::test]
async fn test_history_accepts_query_token() {
    let server = TestServer::spawn().await;
    let alice = create_test_user(&server.state.pool, "alice").await;
    let bob = create_test_user(&server.state.pool, "bob").await;

    for (from, to, text) in [(&alice, &bob, "first"), (&bob, &alice, "second")] {
        server
            .state
            .history
            .append(&RelayMessage::new(
                from.identity.clone(),
                to.identity.clone(),
                text,
            ))
            .await
            .unwrap();
    }

    let response = server
        .http
        .get(server.url(&format!(
            "/api/chat/history?with_user={}&token={}",
            bob.identity, alice.token
        )))
        .send()
        .await
        .unwrap();
    assert_status!(response, 200);

    let body: Value = response.json().await.unwrap();
    let messages = body["messages"].as_array().unwrap();
    let texts: Vec<&str> = messages.iter().map(|m| m["text"].as_str().unwrap()).collect();
    assert_eq!(texts, vec!["first", "second"]);
    assert_eq!(messages[0]["sender_id"], alice.identity.as_str());
    assert_eq!(messages[0]["receiver_id"], bob.identity.as_str());
    assert!(messages[0]["id"].as_i64().unwrap() < messages[1]["id"].as_i64().unwrap());
}
