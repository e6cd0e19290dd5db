//! Database operations for chat history

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use crate::backend::error::BackendError;
use crate::backend::relay::collaborators::HistoryStore;
use crate::shared::messaging::HistoryEntry;
use crate::shared::{RelayMessage, UserIdentity};

/// `HistoryStore` backed by the `messages` table
#[derive(Clone)]
pub struct SqlHistoryStore {
    pool: SqlitePool,
}

impl SqlHistoryStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Stored rows exchanged between `a` and `b`, ordered by id
    pub async fn entries_between(
        &self,
        a: &UserIdentity,
        b: &UserIdentity,
    ) -> Result<Vec<HistoryEntry>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT id, sender_id, receiver_id, text, created_at
            FROM messages
            WHERE (sender_id = ? AND receiver_id = ?) OR (sender_id = ? AND receiver_id = ?)
            ORDER BY id ASC
            "#,
        )
        .bind(a.as_str())
        .bind(b.as_str())
        .bind(b.as_str())
        .bind(a.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| HistoryEntry {
                id: row.get("id"),
                sender_id: UserIdentity::new(row.get::<String, _>("sender_id")),
                receiver_id: UserIdentity::new(row.get::<String, _>("receiver_id")),
                text: row.get("text"),
                created_at: row.get("created_at"),
            })
            .collect())
    }
}

#[async_trait]
impl HistoryStore for SqlHistoryStore {
    async fn append(&self, message: &RelayMessage) -> Result<(), BackendError> {
        sqlx::query(
            "INSERT INTO messages (sender_id, receiver_id, text, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(message.sender.as_str())
        .bind(message.recipient.as_str())
        .bind(&message.body)
        .bind(message.timestamp)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn range_between(
        &self,
        a: &UserIdentity,
        b: &UserIdentity,
    ) -> Result<Vec<RelayMessage>, BackendError> {
        Ok(self
            .entries_between(a, b)
            .await?
            .into_iter()
            .map(|entry| {
                RelayMessage::with_timestamp(
                    entry.sender_id,
                    entry.receiver_id,
                    entry.text,
                    entry.created_at,
                )
            })
            .collect())
    }
}
