/**
 * Current User Handlers
 *
 * - GET /api/user/id - the caller's public identity
 * - GET /api/users/search?q= - find other users by username
 */

use axum::{
    extract::{Query, State},
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{SearchQuery, UserIdResponse};
use crate::backend::auth::users::search_users;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::shared::messaging::{SearchUsersResponse, UserSummary};

/// GET /api/user/id
pub async fn get_user_id(AuthUser(user): AuthUser) -> Json<UserIdResponse> {
    Json(UserIdResponse {
        user_id: user.identity.into_inner(),
    })
}

/// GET /api/users/search
///
/// An empty query returns an empty list rather than every user.
pub async fn search(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchUsersResponse>, BackendError> {
    let needle = query.q.trim();
    if needle.is_empty() {
        return Ok(Json(SearchUsersResponse { users: Vec::new() }));
    }

    let users = search_users(&pool, needle, &user.identity)
        .await?
        .into_iter()
        .map(|found| UserSummary {
            user_id: found.identity(),
            username: found.username,
        })
        .collect();

    Ok(Json(SearchUsersResponse { users }))
}
