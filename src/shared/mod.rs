//! Shared Module
//!
//! Types shared between the server and its clients. Everything here is
//! plain data with serde derives, usable without the `ssr` feature.
//!
//! # Overview
//!
//! - `identity` - The opaque `UserIdentity` handle
//! - `relay` - `RelayMessage` and the inbound/outbound WebSocket frames
//! - `messaging` - Friend and history request/response types
//! - `error` - `SharedError`

/// User identity handle
pub mod identity;

/// Relay message and wire frames
pub mod relay;

/// Shared error types
pub mod error;

/// Friend and history API types
pub mod messaging;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use identity::UserIdentity;
pub use relay::{InboundFrame, OutboundFrame, RelayMessage};
