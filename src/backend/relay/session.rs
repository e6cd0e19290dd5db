/**
 * Session Lifecycle Controller
 *
 * A `Session` owns one admitted connection from registration to teardown.
 * It is the only writer of its own registry entry.
 *
 * # States
 *
 * ```text
 * Admitting ──► Active ──► Closing ──► Closed
 * ```
 *
 * Transitions only move forward. Token verification happens before a
 * `Session` exists (see `handler`), so a session starts in `Admitting`
 * with an identity already established.
 *
 * # Receive Loop
 *
 * Frames are handled one at a time, in arrival order:
 *
 * - text or binary frame that decodes with a recipient → relayed inline
 * - decoded frame without a recipient → ignored
 * - frame that does not decode → the session closes
 * - ping / pong → ignored (the transport answers pings)
 * - close frame, read error or end of stream → the session closes
 */

use axum::extract::ws::Message;
use futures_util::{Stream, StreamExt};
use std::fmt::Display;

use crate::backend::error::BackendError;
use crate::backend::relay::connection::Connection;
use crate::backend::relay::delivery::DeliveryEngine;
use crate::shared::InboundFrame;

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Admitting,
    Active,
    Closing,
    Closed,
}

/// One connection's lifecycle
pub struct Session {
    connection: Connection,
    engine: DeliveryEngine,
    state: SessionState,
}

impl Session {
    pub fn new(connection: Connection, engine: DeliveryEngine) -> Self {
        Self {
            connection,
            engine,
            state: SessionState::Admitting,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Register the connection and enter `Active`
    pub async fn activate(&mut self) {
        if self.state != SessionState::Admitting {
            return;
        }
        self.engine.registry().register(self.connection.clone()).await;
        self.state = SessionState::Active;
        tracing::info!(
            "[Session] {} connected ({})",
            self.connection.identity(),
            self.connection.id()
        );
    }

    /// Drive the session to completion over `inbound`
    ///
    /// Returns once the session is `Closed`.
    pub async fn run<S, E>(mut self, mut inbound: S) -> SessionState
    where
        S: Stream<Item = Result<Message, E>> + Unpin,
        E: Display,
    {
        self.activate().await;

        while self.state == SessionState::Active {
            let Some(next) = inbound.next().await else {
                tracing::debug!("[Session] {} stream ended", self.connection.identity());
                self.state = SessionState::Closing;
                break;
            };

            let payload: Result<String, BackendError> = match next {
                Ok(Message::Text(text)) => Ok(text.as_str().to_owned()),
                Ok(Message::Binary(bytes)) => String::from_utf8(bytes.to_vec())
                    .map_err(|_| BackendError::protocol("binary frame is not UTF-8")),
                Ok(Message::Ping(_)) | Ok(Message::Pong(_)) => continue,
                Ok(Message::Close(_)) => {
                    tracing::debug!("[Session] {} sent close", self.connection.identity());
                    self.state = SessionState::Closing;
                    break;
                }
                Err(e) => {
                    tracing::warn!("[Session] Read error for {}: {}", self.connection.identity(), e);
                    self.state = SessionState::Closing;
                    break;
                }
            };

            let result = match payload {
                Ok(payload) => self.handle_payload(&payload).await,
                Err(e) => Err(e),
            };

            if let Err(e) = result {
                tracing::warn!(
                    "[Session] Closing {} after bad frame: {}",
                    self.connection.identity(),
                    e
                );
                self.state = SessionState::Closing;
            }
        }

        self.close().await
    }

    /// Decode one frame and relay it if it names a recipient
    async fn handle_payload(&self, payload: &str) -> Result<(), BackendError> {
        let frame = parse_frame(payload)?;
        match frame.into_relay_message(self.connection.identity()) {
            Some(message) => self.engine.relay(message).await,
            None => tracing::debug!(
                "[Session] Ignoring frame without recipient from {}",
                self.connection.identity()
            ),
        }
        Ok(())
    }

    async fn close(mut self) -> SessionState {
        self.state = SessionState::Closing;
        self.engine.registry().unregister(&self.connection).await;
        self.state = SessionState::Closed;
        tracing::info!(
            "[Session] {} disconnected ({})",
            self.connection.identity(),
            self.connection.id()
        );
        self.state
    }
}

/// Decode an inbound payload, classifying any failure as a protocol error
fn parse_frame(payload: &str) -> Result<InboundFrame, BackendError> {
    InboundFrame::decode(payload).map_err(|e| BackendError::protocol(e.to_string()))
}
