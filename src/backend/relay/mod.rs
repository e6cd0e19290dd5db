//! Presence & Relay Module
//!
//! The real-time core of the backend: who is online, who may talk to whom,
//! and how a message gets from one WebSocket to another.
//!
//! # Architecture
//!
//! - **`registry`** - `UserIdentity -> Connection` map behind one lock
//! - **`gate`** - Per-message authorization against the friend graph
//! - **`delivery`** - Persist, then attempt live delivery
//! - **`session`** - One connection's lifecycle and receive loop
//! - **`handler`** - `GET /ws` admission and socket plumbing
//! - **`collaborators`** - Traits the core consumes (auth, graph, history)
//!
//! # Module Structure
//!
//! ```text
//! relay/
//! ├── mod.rs           - Module exports and documentation
//! ├── connection.rs    - Connection handle (identity + send capability)
//! ├── registry.rs      - Connection registry
//! ├── collaborators.rs - Authenticator, RelationshipGraph, HistoryStore
//! ├── gate.rs          - Authorization gate
//! ├── delivery.rs      - Delivery engine
//! ├── session.rs       - Session lifecycle controller
//! └── handler.rs       - WebSocket upgrade handler
//! ```
//!
//! # Message Flow
//!
//! 1. Client upgrades `GET /ws` with a session token
//! 2. The session registers its connection and starts its receive loop
//! 3. Each inbound frame passes the gate
//! 4. The delivery engine appends to history, then writes to the
//!    recipient's connection if one is registered
//! 5. On disconnect the session unregisters its own connection
//!
//! # Thread Safety
//!
//! The registry is the only state shared between sessions. Each connection
//! has its own writer task fed by a bounded mpsc channel. Live writes use
//! `try_send`, so a sender never waits on another user's socket; a full
//! queue counts as the recipient being offline.

/// Connection handle
pub mod connection;

/// Connection registry
pub mod registry;

/// Collaborator traits
pub mod collaborators;

/// Authorization gate
pub mod gate;

/// Delivery engine
pub mod delivery;

/// Session lifecycle controller
pub mod session;

/// WebSocket upgrade handler
pub mod handler;

#[cfg(test)]
pub(crate) mod testing;

pub use collaborators::{Authenticator, HistoryStore, RelationshipGraph};
pub use connection::{Connection, OUTBOUND_QUEUE_CAPACITY};
pub use delivery::DeliveryEngine;
pub use gate::AuthorizationGate;
pub use handler::ws_upgrade;
pub use registry::ConnectionRegistry;
pub use session::{Session, SessionState};
