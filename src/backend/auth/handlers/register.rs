/**
 * Register Handler
 *
 * POST /api/auth/register
 *
 * # Registration Process
 *
 * 1. Validate username, email and password
 * 2. Reject an already registered username or email (409)
 * 3. Hash the password with bcrypt
 * 4. Mint a fresh `UserIdentity` and insert the user
 *
 * # Validation
 *
 * - Username: 3-30 chars, starts with a letter, letters/digits/underscore
 * - Email must contain '@'
 * - Password must be at least 8 characters long
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{RegisterRequest, RegisterResponse};
use crate::backend::auth::users::{create_user, user_exists};
use crate::backend::error::BackendError;
use crate::shared::{SharedError, UserIdentity};

/// Validate username format
fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }

    let mut chars = username.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Check a registration request before touching the database
pub fn validate(request: &RegisterRequest) -> Result<(), SharedError> {
    if !is_valid_username(&request.username) {
        return Err(SharedError::validation(
            "username",
            "must be 3-30 chars, start with a letter, and contain only letters, numbers, and underscores",
        ));
    }
    if !request.email.contains('@') {
        return Err(SharedError::validation("email", "invalid email format"));
    }
    if request.password.len() < 8 {
        return Err(SharedError::validation(
            "password",
            "must be at least 8 characters",
        ));
    }
    Ok(())
}

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - validation failed
/// * `409 Conflict` - username or email already registered
/// * `500 Internal Server Error` - hashing or database failure
pub async fn register(
    State(pool): State<SqlitePool>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), BackendError> {
    tracing::info!("Register request for username: {}", request.username);

    validate(&request).map_err(|e| {
        tracing::warn!("Rejected registration: {}", e);
        e
    })?;

    if user_exists(&pool, &request.username, &request.email).await? {
        tracing::warn!("Username or email already registered: {}", request.username);
        return Err(BackendError::handler(
            StatusCode::CONFLICT,
            "Username or email already registered",
        ));
    }

    let password_hash = hash(&request.password, DEFAULT_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        BackendError::state("Failed to hash password")
    })?;

    let identity = UserIdentity::generate();
    let user = create_user(
        &pool,
        &identity,
        &request.username,
        &request.email,
        &password_hash,
    )
    .await
    .map_err(|e| match e.as_database_error() {
        Some(db) if db.is_unique_violation() => {
            BackendError::handler(StatusCode::CONFLICT, "Username or email already registered")
        }
        _ => e.into(),
    })?;

    tracing::info!("User registered: {} ({})", user.username, user.user_id);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user_id: user.user_id,
        }),
    ))
}
