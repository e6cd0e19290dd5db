/**
 * Authentication Middleware
 *
 * Protects routes that require a signed-in user. The token is taken from
 * `Authorization: Bearer <token>`, or from a `?token=` query parameter for
 * clients that cannot set headers. The verified user is attached to the
 * request extensions for handlers to pick up with `AuthUser`.
 */

use axum::{
    extract::{FromRequestParts, Query, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use serde::Deserialize;

use crate::backend::error::{AuthFailure, BackendError};
use crate::backend::auth::sessions::JwtAuthenticator;
use crate::shared::UserIdentity;

/// Authenticated user data resolved from a session token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    /// Internal row id (the token subject)
    pub row_id: i64,
    pub identity: UserIdentity,
    pub username: String,
}

/// `?token=` query parameter
#[derive(Debug, Default, Deserialize)]
pub struct TokenQuery {
    #[serde(default)]
    pub token: Option<String>,
}

/// Extract the token from a `Bearer` Authorization header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
}

/// Authentication middleware
///
/// Returns 401 if the token is missing, invalid, or belongs to a user that
/// no longer exists.
pub async fn auth_middleware(
    State(jwt): State<JwtAuthenticator>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let query_token = Query::<TokenQuery>::try_from_uri(request.uri())
        .ok()
        .and_then(|Query(query)| query.token);

    let token = bearer_token(request.headers())
        .map(str::to_string)
        .or(query_token)
        .ok_or_else(|| {
            tracing::warn!("Missing session token");
            AuthFailure::MissingToken
        })?;

    let user = jwt.authenticate(&token).await.map_err(|e| {
        tracing::warn!("Rejected session token: {}", e);
        e
    })?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Axum extractor for the user attached by `auth_middleware`
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                StatusCode::UNAUTHORIZED
            })?;

        Ok(AuthUser(user))
    }
}
