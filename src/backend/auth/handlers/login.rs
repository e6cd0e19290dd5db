/**
 * Login Handler
 *
 * POST /api/auth/login
 *
 * # Authentication Process
 *
 * 1. Look up the user by username or email
 * 2. Verify the password using bcrypt
 * 3. Issue a 24-hour session token
 *
 * Unknown users and wrong passwords produce the same 401 response.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::verify;
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::backend::auth::sessions::{JwtAuthenticator, SESSION_TTL};
use crate::backend::auth::users::get_user_by_login;
use crate::backend::error::BackendError;

fn invalid_credentials() -> BackendError {
    BackendError::handler(StatusCode::UNAUTHORIZED, "Invalid credentials")
}

/// Login handler
pub async fn login(
    State(pool): State<SqlitePool>,
    State(jwt): State<JwtAuthenticator>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, BackendError> {
    tracing::info!("Login request for: {}", request.login);

    let user = get_user_by_login(&pool, &request.login)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.login);
            invalid_credentials()
        })?;

    let valid = verify(&request.password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        BackendError::state("Password verification failed")
    })?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", request.login);
        return Err(invalid_credentials());
    }

    let token = jwt.issue(user.id, SESSION_TTL)?;
    tracing::info!("User logged in: {} ({})", user.username, user.user_id);

    Ok(Json(TokenResponse { token }))
}
