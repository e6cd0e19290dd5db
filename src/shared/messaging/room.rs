//! Room Data Structures
//!
//! A room is a named space owned by the user who created it. Rooms are
//! managed over HTTP only; the relay does not route by room.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::identity::UserIdentity;

/// Shortest accepted room name, in characters
pub const ROOM_NAME_MIN: usize = 3;

/// Longest accepted room name, in characters
pub const ROOM_NAME_MAX: usize = 50;

/// A stored room
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Room {
    pub id: i64,
    /// Public room handle (UUID string)
    pub room_id: String,
    /// The owner's identity
    pub user_id: UserIdentity,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /api/rooms/create`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    #[serde(default)]
    pub name: String,
}

impl CreateRoomRequest {
    pub fn has_valid_name(&self) -> bool {
        (ROOM_NAME_MIN..=ROOM_NAME_MAX).contains(&self.name.chars().count())
    }
}

/// Response type for a newly created room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomResponse {
    pub room: Room,
}

/// Response type for listing the caller's rooms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListRoomsResponse {
    pub rooms: Vec<Room>,
}

/// Acknowledgement for a deleted room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomActionResponse {
    pub message: String,
}
