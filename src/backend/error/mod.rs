//! Backend Error Module
//!
//! Error types specific to the backend server. These are used by HTTP
//! handlers, by the relay's collaborator traits, and at WebSocket admission.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Error Types
//!
//! - `BackendError` - Everything a handler or store can fail with
//! - `AuthFailure` - Why a session token was not accepted
//!
//! # HTTP Response Conversion
//!
//! `BackendError` implements `IntoResponse`, so handlers can return it
//! directly. The body is `{"error": "...", "status": <code>}`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{AuthFailure, BackendError};
