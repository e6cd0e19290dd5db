//! Database operations for the friend graph

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::backend::error::BackendError;
use crate::backend::relay::collaborators::RelationshipGraph;
use crate::shared::messaging::Friend;
use crate::shared::UserIdentity;

/// Whether `a` and `b` are linked in either direction
pub async fn are_linked(
    pool: &SqlitePool,
    a: &UserIdentity,
    b: &UserIdentity,
) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM friends
        WHERE (user_id = ? AND friend_id = ?) OR (user_id = ? AND friend_id = ?)
        "#,
    )
    .bind(a.as_str())
    .bind(b.as_str())
    .bind(b.as_str())
    .bind(a.as_str())
    .fetch_one(pool)
    .await?;

    Ok(count > 0)
}

/// Record a link from `user` to `friend`
pub async fn insert_friend(
    pool: &SqlitePool,
    user: &UserIdentity,
    friend: &UserIdentity,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO friends (user_id, friend_id, created_at) VALUES (?, ?, ?)")
        .bind(user.as_str())
        .bind(friend.as_str())
        .bind(Utc::now())
        .execute(pool)
        .await?;
    Ok(())
}

/// Remove the link between `a` and `b`, whichever direction it was stored in
///
/// Returns the number of rows removed.
pub async fn delete_friend(
    pool: &SqlitePool,
    a: &UserIdentity,
    b: &UserIdentity,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM friends
        WHERE (user_id = ? AND friend_id = ?) OR (user_id = ? AND friend_id = ?)
        "#,
    )
    .bind(a.as_str())
    .bind(b.as_str())
    .bind(b.as_str())
    .bind(a.as_str())
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Everyone linked with `user`, ordered by username
pub async fn get_friends_for_user(
    pool: &SqlitePool,
    user: &UserIdentity,
) -> Result<Vec<Friend>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT DISTINCT u.user_id, u.username
        FROM friends f
        INNER JOIN users u
            ON u.user_id = CASE WHEN f.user_id = ? THEN f.friend_id ELSE f.user_id END
        WHERE f.user_id = ? OR f.friend_id = ?
        ORDER BY u.username
        "#,
    )
    .bind(user.as_str())
    .bind(user.as_str())
    .bind(user.as_str())
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| Friend {
            user_id: UserIdentity::new(row.get::<String, _>("user_id")),
            username: row.get("username"),
        })
        .collect())
}

/// `RelationshipGraph` backed by the `friends` table
#[derive(Clone)]
pub struct SqlRelationshipGraph {
    pool: SqlitePool,
}

impl SqlRelationshipGraph {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RelationshipGraph for SqlRelationshipGraph {
    async fn linked(&self, a: &UserIdentity, b: &UserIdentity) -> Result<bool, BackendError> {
        Ok(are_linked(&self.pool, a, b).await?)
    }
}
