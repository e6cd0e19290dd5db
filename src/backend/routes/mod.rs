//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, CORS and tracing layers
//! └── api_routes.rs   - API and WebSocket endpoints
//! ```
//!
//! # Route Types
//!
//! ## Public
//!
//! - `POST /api/auth/register` - User registration
//! - `POST /api/auth/login` - User login
//! - `GET /ws` - Relay WebSocket (authenticates its own token)
//!
//! ## Authenticated
//!
//! - `POST /api/auth/refresh` - New session token
//! - `GET /api/user/id` - Caller's identity
//! - `GET /api/users/search` - User search
//! - `GET /api/friends`, `POST /api/friends/add`, `DELETE /api/friends/{user_id}`
//! - `GET /api/chat/history` - Chat history with one user

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
