//! Friend HTTP Handlers
//!
//! - GET /api/friends
//! - POST /api/friends/add
//! - DELETE /api/friends/{user_id}
//!
//! All three require an authenticated caller.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sqlx::SqlitePool;

use super::db;
use crate::backend::auth::users::get_user_by_username;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::shared::messaging::{AddFriendRequest, FriendActionResponse, ListFriendsResponse};
use crate::shared::UserIdentity;

/// List the caller's friends
pub async fn list_friends(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Json<ListFriendsResponse>, BackendError> {
    let friends = db::get_friends_for_user(&pool, &user.identity)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch friends for {}: {:?}", user.identity, e);
            e
        })?;

    Ok(Json(ListFriendsResponse { friends }))
}

/// Link the caller with another user by username
///
/// # Errors
///
/// * `400 Bad Request` - caller named themselves
/// * `404 Not Found` - no such username
/// * `409 Conflict` - already linked, in either direction
pub async fn add_friend(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Json(request): Json<AddFriendRequest>,
) -> Result<Json<FriendActionResponse>, BackendError> {
    let friend = get_user_by_username(&pool, request.friend_username.trim())
        .await?
        .ok_or_else(|| BackendError::handler(StatusCode::NOT_FOUND, "Friend not found"))?;
    let friend_identity = friend.identity();

    if friend_identity == user.identity {
        return Err(BackendError::handler(
            StatusCode::BAD_REQUEST,
            "Cannot add yourself as a friend",
        ));
    }

    if db::are_linked(&pool, &user.identity, &friend_identity).await? {
        return Err(BackendError::handler(
            StatusCode::CONFLICT,
            "Friend already added",
        ));
    }

    db::insert_friend(&pool, &user.identity, &friend_identity).await?;
    tracing::info!("{} added friend {}", user.identity, friend_identity);

    Ok(Json(FriendActionResponse {
        message: "Friend added".to_string(),
    }))
}

/// Remove the link between the caller and `user_id`
///
/// Removing a link that does not exist is not an error.
pub async fn remove_friend(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(friend_id): Path<String>,
) -> Result<Json<FriendActionResponse>, BackendError> {
    let friend_identity = UserIdentity::new(friend_id);
    let removed = db::delete_friend(&pool, &user.identity, &friend_identity).await?;
    tracing::info!(
        "{} removed friend {} ({} rows)",
        user.identity,
        friend_identity,
        removed
    );

    Ok(Json(FriendActionResponse {
        message: "Friend removed".to_string(),
    }))
}
