/**
 * Session Tokens
 *
 * This module handles JWT generation and validation for user sessions, and
 * provides `JwtAuthenticator`, the production `Authenticator` used at
 * WebSocket admission and by the auth middleware.
 *
 * # Token Format
 *
 * HS256-signed JWT with claims `{sub, exp, iat}`. `sub` is the user's
 * internal row id; the row is looked up on every verification so a deleted
 * user's tokens stop working immediately.
 *
 * # Lifetimes
 *
 * - `SESSION_TTL` (24 hours) - default
 * - `DESKTOP_SESSION_TTL` (30 days) - refresh requested by the desktop client
 */

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::backend::auth::users::get_user_by_row_id;
use crate::backend::error::{AuthFailure, BackendError};
use crate::backend::middleware::auth::AuthenticatedUser;
use crate::backend::relay::collaborators::Authenticator;
use crate::shared::UserIdentity;

/// Default token lifetime
pub const SESSION_TTL: Duration = Duration::hours(24);

/// Token lifetime for desktop clients
pub const DESKTOP_SESSION_TTL: Duration = Duration::days(30);

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Internal user row id
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

impl Claims {
    /// The row id carried in `sub`
    pub fn row_id(&self) -> Result<i64, AuthFailure> {
        self.sub.parse().map_err(|_| AuthFailure::InvalidToken)
    }
}

/// Create a signed token for the user with `row_id`
///
/// # Errors
///
/// Returns `BackendError::StateError` if signing fails.
pub fn create_token(row_id: i64, secret: &str, ttl: Duration) -> Result<String, BackendError> {
    let now = Utc::now();
    let claims = Claims {
        sub: row_id.to_string(),
        exp: (now + ttl).timestamp().max(0) as u64,
        iat: now.timestamp().max(0) as u64,
    };

    let key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), &claims, &key).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        BackendError::state("Failed to create token")
    })
}

/// Verify signature and expiry, returning the claims
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AuthFailure> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    decode::<Claims>(token, &key, &Validation::default())
        .map(|data| data.claims)
        .map_err(|e| {
            tracing::debug!("Token verification failed: {:?}", e);
            AuthFailure::InvalidToken
        })
}

/// Verifies tokens against the signing secret and the users table
#[derive(Clone)]
pub struct JwtAuthenticator {
    secret: String,
    pool: SqlitePool,
}

impl JwtAuthenticator {
    pub fn new(secret: impl Into<String>, pool: SqlitePool) -> Self {
        Self {
            secret: secret.into(),
            pool,
        }
    }

    /// Issue a token for `row_id` with the given lifetime
    pub fn issue(&self, row_id: i64, ttl: Duration) -> Result<String, BackendError> {
        create_token(row_id, &self.secret, ttl)
    }

    /// Verify a token and load the user it belongs to
    pub async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser, AuthFailure> {
        if token.is_empty() {
            return Err(AuthFailure::MissingToken);
        }
        let row_id = verify_token(token, &self.secret)?.row_id()?;

        let user = get_user_by_row_id(&self.pool, row_id)
            .await
            .map_err(|e| {
                tracing::error!("Database error during authentication: {:?}", e);
                AuthFailure::Lookup(e.to_string())
            })?
            .ok_or(AuthFailure::UnknownUser)?;

        Ok(AuthenticatedUser {
            row_id: user.id,
            identity: UserIdentity::new(user.user_id),
            username: user.username,
        })
    }
}

#[async_trait]
impl Authenticator for JwtAuthenticator {
    async fn identity_for(&self, token: &str) -> Result<UserIdentity, AuthFailure> {
        self.authenticate(token).await.map(|user| user.identity)
    }
}
