//! Friends Module
//!
//! The friend graph: HTTP endpoints that write it and the
//! `RelationshipGraph` implementation the relay reads it through.
//!
//! # Module Structure
//!
//! ```text
//! friends/
//! ├── mod.rs       - Module exports and documentation
//! ├── db.rs        - Database operations and SqlRelationshipGraph
//! └── handlers.rs  - List / add / remove endpoints
//! ```
//!
//! # Symmetry
//!
//! A friendship is one row, stored in whichever direction it was created.
//! Every read treats the row as undirected.

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use db::SqlRelationshipGraph;
pub use handlers::{add_friend, list_friends, remove_friend};
