/**
 * User Model and Database Operations
 *
 * Each user has two ids: the integer row id (`id`) used inside storage and
 * inside session tokens, and the `user_id` string that is their public
 * `UserIdentity`. Only the latter ever appears in relay frames, friend lists
 * or chat history.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::shared::UserIdentity;

/// Maximum number of results returned by `search_users`
pub const SEARCH_LIMIT: i64 = 20;

/// User row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Internal row id
    pub id: i64,
    /// Public identity (UUID string)
    pub user_id: String,
    /// Username (unique, 3-30 chars, alphanumeric + underscore)
    pub username: String,
    /// User email address
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn identity(&self) -> UserIdentity {
        UserIdentity::new(self.user_id.clone())
    }
}

/// Create a new user
pub async fn create_user(
    pool: &SqlitePool,
    identity: &UserIdentity,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (user_id, username, email, password_hash, created_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, user_id, username, email, password_hash, created_at
        "#,
    )
    .bind(identity.as_str())
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by username or email
pub async fn get_user_by_login(
    pool: &SqlitePool,
    login: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, user_id, username, email, password_hash, created_at
        FROM users
        WHERE username = ? OR email = ?
        "#,
    )
    .bind(login)
    .bind(login)
    .fetch_optional(pool)
    .await
}

/// Get user by username
pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, user_id, username, email, password_hash, created_at
        FROM users
        WHERE username = ?
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

/// Get user by internal row id
pub async fn get_user_by_row_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, user_id, username, email, password_hash, created_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Whether a username or email is already registered
pub async fn user_exists(pool: &SqlitePool, username: &str, email: &str) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = ? OR email = ?")
        .bind(username)
        .bind(email)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

/// Users whose username contains `query`, excluding `exclude`
pub async fn search_users(
    pool: &SqlitePool,
    query: &str,
    exclude: &UserIdentity,
) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, user_id, username, email, password_hash, created_at
        FROM users
        WHERE username LIKE '%' || ? || '%' AND user_id != ?
        ORDER BY username
        LIMIT ?
        "#,
    )
    .bind(query)
    .bind(exclude.as_str())
    .bind(SEARCH_LIMIT)
    .fetch_all(pool)
    .await
}
