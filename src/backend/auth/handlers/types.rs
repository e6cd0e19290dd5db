/**
 * Authentication Handler Types
 *
 * Request and response bodies for the account endpoints.
 */

use serde::{Deserialize, Serialize};

/// Registration request
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// Chosen username (3-30 chars, alphanumeric + underscore)
    pub username: String,
    pub email: String,
    /// Plain password (hashed before storage)
    pub password: String,
}

/// Registration response
#[derive(Serialize, Deserialize, Debug)]
pub struct RegisterResponse {
    pub message: String,
    /// Public identity of the new user
    pub user_id: String,
}

/// Login request
///
/// `login` may be either the username or the email address.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

/// Token response, returned by login and refresh
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    pub token: String,
}

/// `GET /api/user/id` response
///
/// Serialized as `{"userID": ...}`, the key existing clients read.
#[derive(Serialize, Deserialize, Debug)]
pub struct UserIdResponse {
    #[serde(rename = "userID")]
    pub user_id: String,
}

/// `GET /api/users/search` query
#[derive(Deserialize, Debug, Default)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}
