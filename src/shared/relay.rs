/**
 * Relay Message and Wire Frames
 *
 * This module defines the unit of delivery (`RelayMessage`) and the two
 * JSON frame shapes exchanged over a relay WebSocket.
 *
 * # Wire Protocol
 *
 * Client → server, one JSON object per text frame:
 *
 * ```json
 * {"to": "<UserIdentity>", "message": "<string>"}
 * ```
 *
 * Server → recipient:
 *
 * ```json
 * {"from": "<UserIdentity>", "to": "<UserIdentity>", "message": "<string>"}
 * ```
 *
 * There is no acknowledgement, heartbeat or error frame.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::identity::UserIdentity;

/// One sender → recipient text payload
///
/// Built by a session's receive loop from a decoded inbound frame. Once it
/// passes authorization it is persisted exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayMessage {
    pub sender: UserIdentity,
    pub recipient: UserIdentity,
    pub body: String,
    pub timestamp: DateTime<Utc>,
}

impl RelayMessage {
    /// Create a message stamped with the current UTC time
    pub fn new(sender: UserIdentity, recipient: UserIdentity, body: impl Into<String>) -> Self {
        Self::with_timestamp(sender, recipient, body, Utc::now())
    }

    /// Create a message with an explicit timestamp (used when loading history)
    pub fn with_timestamp(
        sender: UserIdentity,
        recipient: UserIdentity,
        body: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            sender,
            recipient,
            body: body.into(),
            timestamp,
        }
    }

    /// The frame written to the recipient's connection
    pub fn to_outbound(&self) -> OutboundFrame {
        OutboundFrame {
            from: self.sender.clone(),
            to: self.recipient.clone(),
            message: self.body.clone(),
        }
    }
}

/// Inbound frame (client → server)
///
/// Both fields are optional on the wire: a missing `to` is treated the same
/// as an empty one, and a missing `message` is an empty body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundFrame {
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl InboundFrame {
    /// Decode one frame payload
    ///
    /// # Errors
    ///
    /// Returns `SharedError::FrameError` when the payload is valid JSON but
    /// not an object, and `SharedError::SerializationError` when it is not
    /// JSON or its fields have the wrong types. The session treats both as
    /// fatal.
    pub fn decode(payload: &str) -> Result<Self, SharedError> {
        // A derived struct deserializer also accepts a JSON array
        match serde_json::from_str(payload)? {
            value @ serde_json::Value::Object(_) => Ok(serde_json::from_value(value)?),
            _ => Err(SharedError::frame("inbound frame must be a JSON object")),
        }
    }

    /// Recipient named by the frame, or `None` when it is absent or empty
    pub fn recipient(&self) -> Option<UserIdentity> {
        self.to
            .as_deref()
            .filter(|to| !to.is_empty())
            .map(UserIdentity::from)
    }

    /// Turn the frame into a relay message from `sender`
    ///
    /// Returns `None` for frames without a recipient; those are ignored.
    pub fn into_relay_message(self, sender: &UserIdentity) -> Option<RelayMessage> {
        let recipient = self.recipient()?;
        Some(RelayMessage::new(sender.clone(), recipient, self.message))
    }
}

/// Outbound frame (server → recipient)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundFrame {
    pub from: UserIdentity,
    pub to: UserIdentity,
    pub message: String,
}

impl OutboundFrame {
    pub fn encode(&self) -> Result<String, SharedError> {
        Ok(serde_json::to_string(self)?)
    }
}
