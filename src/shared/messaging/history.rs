//! Chat History Data Structures
//!
//! Shapes returned by `GET /api/chat/history`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::identity::UserIdentity;

/// Query parameters for a history request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatHistoryQuery {
    /// The other participant
    pub with_user: Option<String>,
    /// Session token, for clients that cannot set an Authorization header
    pub token: Option<String>,
}

/// One persisted message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: i64,
    pub sender_id: UserIdentity,
    pub receiver_id: UserIdentity,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Response type for a history request, oldest message first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatHistoryResponse {
    pub messages: Vec<HistoryEntry>,
}
