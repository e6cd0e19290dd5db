//! Chat History Module
//!
//! The durable message log. Every authorized relay message is appended here
//! whether or not its recipient was online; clients read it back with
//! `GET /api/chat/history`.
//!
//! # Module Structure
//!
//! ```text
//! history/
//! ├── mod.rs       - Module exports and documentation
//! ├── db.rs        - SqlHistoryStore
//! └── handlers.rs  - History endpoint
//! ```

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use db::SqlHistoryStore;
pub use handlers::get_history;
