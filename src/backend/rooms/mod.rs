//! Rooms Module
//!
//! Named rooms owned by the user who created them. Only the owner can see
//! or delete a room.
//!
//! # Module Structure
//!
//! ```text
//! rooms/
//! ├── mod.rs       - Module exports and documentation
//! ├── db.rs        - Database operations
//! └── handlers.rs  - List / create / delete endpoints
//! ```

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_room, delete_room, list_rooms};
