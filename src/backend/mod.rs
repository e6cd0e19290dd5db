//! Backend Module
//!
//! All server-side code: the Axum HTTP server, the presence & relay engine,
//! and the account, friend and history endpoints around it.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`relay`** - Connection registry, authorization gate, delivery engine,
//!   session lifecycle and the `/ws` endpoint
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Accounts, JWT tokens, `JwtAuthenticator`
//! - **`friends`** - Friend graph endpoints and `SqlRelationshipGraph`
//! - **`history`** - Chat history endpoint and `SqlHistoryStore`
//! - **`rooms`** - Room list / create / delete endpoints
//! - **`middleware`** - Request authentication
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── relay/          - Presence & relay engine
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── friends/        - Relationship graph
//! ├── history/        - Message log
//! ├── rooms/          - Owner-scoped rooms
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Thread Safety
//!
//! - `Arc<RwLock<>>` for the connection registry
//! - one bounded mpsc queue and writer task per WebSocket
//! - the SQLite pool is thread-safe; each statement is independently atomic
//!
//! # Error Handling
//!
//! Handlers return `BackendError`, which converts to a JSON error response.
//! Inside the relay, failures are logged and never cross sessions.

/// Presence & relay engine
#[cfg(feature = "ssr")]
pub mod relay;

/// Server setup and configuration
#[cfg(feature = "ssr")]
pub mod server;

/// Route configuration
#[cfg(feature = "ssr")]
pub mod routes;

/// Backend error types
#[cfg(feature = "ssr")]
pub mod error;

/// Authentication and user management
#[cfg(feature = "ssr")]
pub mod auth;

/// Friend graph
#[cfg(feature = "ssr")]
pub mod friends;

/// Chat history
#[cfg(feature = "ssr")]
pub mod history;

/// Rooms
#[cfg(feature = "ssr")]
pub mod rooms;

/// Middleware for request processing
#[cfg(feature = "ssr")]
pub mod middleware;

#[cfg(feature = "ssr")]
pub use error::BackendError;
#[cfg(feature = "ssr")]
pub use server::create_app;
