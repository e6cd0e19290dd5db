//! Relay integration tests
//!
//! End-to-end tests over real WebSocket connections.
