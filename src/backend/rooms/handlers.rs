//! Room HTTP Handlers
//!
//! - GET /api/rooms
//! - POST /api/rooms/create
//! - DELETE /api/rooms/{id}
//!
//! All three require an authenticated caller and only ever touch the
//! caller's own rooms.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sqlx::SqlitePool;

use super::db;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::shared::messaging::{
    CreateRoomRequest, ListRoomsResponse, RoomActionResponse, RoomResponse,
};

/// List the rooms the caller created
pub async fn list_rooms(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Json<ListRoomsResponse>, BackendError> {
    let rooms = db::get_rooms_for_owner(&pool, &user.identity).await?;
    Ok(Json(ListRoomsResponse { rooms }))
}

/// Create a room owned by the caller
///
/// # Errors
///
/// * `400 Bad Request` - name shorter than 3 or longer than 50 characters
pub async fn create_room(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Json(request): Json<CreateRoomRequest>,
) -> Result<(StatusCode, Json<RoomResponse>), BackendError> {
    if !request.has_valid_name() {
        return Err(BackendError::handler(
            StatusCode::BAD_REQUEST,
            "Room name must be 3-50 characters",
        ));
    }

    let room = db::insert_room(&pool, &user.identity, &request.name).await?;
    tracing::info!("{} created room {} ({})", user.identity, room.id, room.name);

    Ok((StatusCode::CREATED, Json(RoomResponse { room })))
}

/// Delete one of the caller's rooms
///
/// # Errors
///
/// * `400 Bad Request` - `id` is not an integer
/// * `404 Not Found` - no such room, or it belongs to someone else
pub async fn delete_room(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<RoomActionResponse>, BackendError> {
    let id: i64 = id
        .parse()
        .map_err(|_| BackendError::handler(StatusCode::BAD_REQUEST, "Invalid room ID"))?;

    if db::delete_owned_room(&pool, id, &user.identity).await? == 0 {
        return Err(BackendError::handler(StatusCode::NOT_FOUND, "Room not found"));
    }
    tracing::info!("{} deleted room {}", user.identity, id);

    Ok(Json(RoomActionResponse {
        message: "Room deleted".to_string(),
    }))
}
