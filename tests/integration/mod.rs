//! Integration tests
//!
//! Each test boots its own server with a private in-memory database.

pub mod api;
pub mod database;
pub mod relay;
