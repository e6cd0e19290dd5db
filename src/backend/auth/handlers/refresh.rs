/**
 * Token Refresh Handler
 *
 * POST /api/auth/refresh
 *
 * Issues a new token for an already authenticated user. Desktop clients
 * (`X-Client-Type: desktop`) get a 30-day token; everyone else 24 hours.
 */

use axum::{extract::State, http::HeaderMap, response::Json};

use crate::backend::auth::handlers::types::TokenResponse;
use crate::backend::auth::sessions::{JwtAuthenticator, DESKTOP_SESSION_TTL, SESSION_TTL};
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;

/// Header identifying the client kind
pub const CLIENT_TYPE_HEADER: &str = "x-client-type";

fn is_desktop_client(headers: &HeaderMap) -> bool {
    headers
        .get(CLIENT_TYPE_HEADER)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.eq_ignore_ascii_case("desktop"))
}

pub async fn refresh(
    State(jwt): State<JwtAuthenticator>,
    AuthUser(user): AuthUser,
    headers: HeaderMap,
) -> Result<Json<TokenResponse>, BackendError> {
    let ttl = if is_desktop_client(&headers) {
        DESKTOP_SESSION_TTL
    } else {
        SESSION_TTL
    };

    let token = jwt.issue(user.row_id, ttl)?;
    tracing::info!("Token refreshed for {}", user.identity);

    Ok(Json(TokenResponse { token }))
}
