//! API integration tests
//!
//! Integration tests for the HTTP endpoints

mod auth_test;
mod friends_test;
mod history_test;
mod rooms_test;
