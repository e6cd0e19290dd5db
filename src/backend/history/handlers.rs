//! Chat History HTTP Handler
//!
//! GET /api/chat/history?with_user=<identity>
//!
//! The caller is authenticated by `auth_middleware`, which also accepts the
//! token as `?token=`.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use super::db::SqlHistoryStore;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::shared::messaging::{ChatHistoryQuery, ChatHistoryResponse};
use crate::shared::UserIdentity;

/// Messages between the caller and `with_user`, oldest first
pub async fn get_history(
    State(store): State<SqlHistoryStore>,
    AuthUser(user): AuthUser,
    Query(query): Query<ChatHistoryQuery>,
) -> Result<Json<ChatHistoryResponse>, BackendError> {
    let other = query
        .with_user
        .filter(|with_user| !with_user.is_empty())
        .map(UserIdentity::new)
        .ok_or_else(|| BackendError::handler(StatusCode::BAD_REQUEST, "with_user is required"))?;

    let messages = store
        .entries_between(&user.identity, &other)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load history {} <-> {}: {:?}", user.identity, other, e);
            e
        })?;

    Ok(Json(ChatHistoryResponse { messages }))
}
