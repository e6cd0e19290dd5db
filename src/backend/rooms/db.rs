//! Database operations for rooms

use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use crate::shared::messaging::Room;
use crate::shared::UserIdentity;

fn room_from_row(row: SqliteRow) -> Room {
    Room {
        id: row.get("id"),
        room_id: row.get("room_id"),
        user_id: UserIdentity::new(row.get::<String, _>("user_id")),
        name: row.get("name"),
        created_at: row.get("created_at"),
    }
}

/// Create a room owned by `owner`
pub async fn insert_room(
    pool: &SqlitePool,
    owner: &UserIdentity,
    name: &str,
) -> Result<Room, sqlx::Error> {
    let row = sqlx::query(
        r#"
        INSERT INTO rooms (room_id, user_id, name, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, room_id, user_id, name, created_at
        "#,
    )
    .bind(uuid::Uuid::new_v4().to_string())
    .bind(owner.as_str())
    .bind(name)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(room_from_row(row))
}

/// Rooms created by `owner`, oldest first
pub async fn get_rooms_for_owner(
    pool: &SqlitePool,
    owner: &UserIdentity,
) -> Result<Vec<Room>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, room_id, user_id, name, created_at
        FROM rooms
        WHERE user_id = ?
        ORDER BY id ASC
        "#,
    )
    .bind(owner.as_str())
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(room_from_row).collect())
}

/// Delete room `id` if `owner` created it
///
/// Returns the number of rows removed (0 when the room does not exist or
/// belongs to someone else).
pub async fn delete_owned_room(
    pool: &SqlitePool,
    id: i64,
    owner: &UserIdentity,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM rooms WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(owner.as_str())
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
