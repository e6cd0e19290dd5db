//! A real server on an ephemeral port
//!
//! Tests drive it over HTTP with `reqwest` and over WebSocket with
//! `tokio-tungstenite`. The `AppState` is kept so tests can seed the
//! database and observe the connection registry directly.

use std::net::SocketAddr;
use std::time::Duration;

use callrelay::backend::routes::create_router;
use callrelay::backend::server::{AppState, ServerConfig};
use callrelay::shared::UserIdentity;
use futures_util::StreamExt;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

use super::auth_helpers::TEST_SECRET;
use super::database::TestDatabase;

pub type TestSocket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// How long to wait for something that should happen
pub const EVENTUALLY: Duration = Duration::from_secs(5);

/// How long to wait before concluding something did not happen
pub const QUIET_PERIOD: Duration = Duration::from_millis(300);

pub struct TestServer {
    pub addr: SocketAddr,
    pub state: AppState,
    pub http: reqwest::Client,
}

impl TestServer {
    pub async fn spawn() -> Self {
        let db = TestDatabase::new().await;
        let config = ServerConfig::builder()
            .jwt_secret(TEST_SECRET)
            .allow_origins(vec!["http://localhost:1420".to_string()])
            .database_url("sqlite::memory:")
            .build()
            .expect("Invalid test config");

        let state = AppState::new(config, db.pool().clone());
        let app = create_router(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("No local address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server failed");
        });

        Self {
            addr,
            state,
            http: reqwest::Client::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn ws_url(&self, token: &str) -> String {
        format!("ws://{}/ws?token={}", self.addr, token)
    }

    /// Open a relay socket and wait until the session is registered
    pub async fn connect(&self, token: &str, identity: &UserIdentity) -> TestSocket {
        let (socket, _) = tokio_tungstenite::connect_async(self.ws_url(token))
            .await
            .expect("WebSocket handshake failed");
        self.wait_until_online(identity).await;
        socket
    }

    pub async fn wait_until_online(&self, identity: &UserIdentity) {
        tokio::time::timeout(EVENTUALLY, async {
            while !self.state.registry().is_online(identity).await {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .expect("Session never registered");
    }

    pub async fn wait_until_offline(&self, identity: &UserIdentity) {
        tokio::time::timeout(EVENTUALLY, async {
            while self.state.registry().is_online(identity).await {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .expect("Session never unregistered");
    }
}

/// Next text frame as JSON, or `None` if nothing arrives within `wait`
pub async fn next_json(socket: &mut TestSocket, wait: Duration) -> Option<serde_json::Value> {
    loop {
        let message = tokio::time::timeout(wait, socket.next()).await.ok()??.ok()?;
        match message {
            Message::Text(text) => {
                return Some(serde_json::from_str(text.as_str()).expect("Server sent invalid JSON"))
            }
            Message::Close(_) => return None,
            _ => continue,
        }
    }
}
