//! Friend Data Structures
//!
//! A friendship is an undirected link between two user identities. It is
//! stored as a single row, in whichever direction it was created.

use serde::{Deserialize, Serialize};

use crate::shared::identity::UserIdentity;

/// A user the caller is linked with
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Friend {
    /// The friend's stable identity
    pub user_id: UserIdentity,
    /// The friend's username
    pub username: String,
}

/// Response type for listing friends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListFriendsResponse {
    pub friends: Vec<Friend>,
}

/// Request to link with another user by username
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddFriendRequest {
    pub friend_username: String,
}

/// Public view of a user, as returned by search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    pub user_id: UserIdentity,
    pub username: String,
}

/// Response type for user search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchUsersResponse {
    pub users: Vec<UserSummary>,
}

/// Acknowledgement for add/remove friend requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendActionResponse {
    pub message: String,
}
