//! Messaging Module
//!
//! Request and response types for the HTTP side of messaging:
//!
//! - `Friend` - A user the caller is linked with
//! - `HistoryEntry` - One persisted message in a chat history page
//! - `Room` - A named room owned by its creator
//!
//! The relay's own wire frames live in `shared::relay`.

pub mod friend;
pub mod history;
pub mod room;

pub use friend::{
    AddFriendRequest, Friend, FriendActionResponse, ListFriendsResponse, SearchUsersResponse,
    UserSummary,
};
pub use history::{ChatHistoryQuery, ChatHistoryResponse, HistoryEntry};
pub use room::{CreateRoomRequest, ListRoomsResponse, Room, RoomActionResponse, RoomResponse};
