//! callrelay - Main Library
//!
//! callrelay is the backend of a social/calling application. Most of it is
//! conventional account and friend-list plumbing; the part with real
//! engineering content is the real-time message relay.
//!
//! # Overview
//!
//! This library provides:
//! - A presence registry of users reachable over a live WebSocket
//! - An authorization gate backed by the friend graph
//! - Live delivery with transparent fallback to durable history
//! - Account, friend and chat-history HTTP endpoints
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between the server and its clients
//!   - User identities, relay messages, wire frames
//!   - Request/response types for the HTTP API
//!   - Error and configuration types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server and WebSocket endpoint
//!   - Presence & relay engine
//!   - Authentication, friends and history stores (SQLite via sqlx)
//!
//! # Feature Flags
//!
//! - **`ssr`** - Server build (enabled by default). Pulls in axum, bcrypt,
//!   jsonwebtoken and the tracing subscriber.
//!
//! # Usage
//!
//! ```rust,no_run
//! use callrelay::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! The only state shared between connections is the connection registry,
//! an `Arc<RwLock<HashMap<..>>>`. The database pool is thread-safe.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
