/**
 * WebSocket Upgrade Handler
 *
 * `GET /ws` admits one relay session.
 *
 * # Admission
 *
 * The session token is read from `Authorization: Bearer <token>`, falling
 * back to the `?token=` query parameter (browsers cannot set headers on a
 * WebSocket handshake). The token is checked before the upgrade: a missing
 * or invalid token is answered with 401 and no session state is created.
 *
 * # Socket Plumbing
 *
 * The socket is split. The write half belongs to a writer task that drains
 * the connection's outbound queue; the read half drives the `Session`
 * receive loop on the handler's own task.
 */

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    http::HeaderMap,
    response::Response,
};
use futures_util::{SinkExt, StreamExt};

use crate::backend::error::{AuthFailure, BackendError};
use crate::backend::middleware::auth::{bearer_token, TokenQuery};
use crate::backend::relay::collaborators::Authenticator;
use crate::backend::relay::connection::Connection;
use crate::backend::relay::delivery::DeliveryEngine;
use crate::backend::relay::session::Session;
use crate::backend::server::state::AppState;
use crate::shared::UserIdentity;

/// GET /ws
pub async fn ws_upgrade(
    State(state): State<AppState>,
    Query(query): Query<TokenQuery>,
    headers: HeaderMap,
    ws: WebSocketUpgrade,
) -> Result<Response, BackendError> {
    let identity = admit(
        state.authenticator.as_ref(),
        &headers,
        query.token.as_deref(),
    )
    .await
    .map_err(|e| {
        tracing::warn!("[Session] Rejected WebSocket upgrade: {}", e);
        e
    })?;

    let engine = state.engine.clone();
    Ok(ws.on_upgrade(move |socket| handle_socket(socket, identity, engine)))
}

/// Resolve the identity behind an upgrade request's token
pub async fn admit(
    authenticator: &dyn Authenticator,
    headers: &HeaderMap,
    query_token: Option<&str>,
) -> Result<UserIdentity, AuthFailure> {
    let token = bearer_token(headers)
        .or(query_token)
        .filter(|token| !token.is_empty())
        .ok_or(AuthFailure::MissingToken)?;

    authenticator.identity_for(token).await
}

async fn handle_socket(socket: WebSocket, identity: UserIdentity, engine: DeliveryEngine) {
    let (mut sink, stream) = socket.split();
    let (connection, mut outbound) = Connection::open(identity);

    let writer = tokio::spawn(async move {
        while let Some(frame) = outbound.recv().await {
            let text = match frame.encode() {
                Ok(text) => text,
                Err(e) => {
                    tracing::error!("[Session] Failed to encode outbound frame: {}", e);
                    continue;
                }
            };
            if sink.send(Message::Text(text.into())).await.is_err() {
                break;
            }
        }
        let _ = sink.close().await;
    });

    Session::new(connection, engine).run(stream).await;

    if let Err(e) = writer.await {
        tracing::error!("[Session] Writer task failed: {}", e);
    }
}
