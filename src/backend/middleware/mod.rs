//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - Session token verification for protected routes

pub mod auth;

pub use auth::{auth_middleware, bearer_token, AuthUser, AuthenticatedUser, TokenQuery};
