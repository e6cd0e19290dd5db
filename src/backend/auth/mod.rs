//! Authentication Module
//!
//! User accounts, session tokens and the account HTTP endpoints.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - JWT tokens and JwtAuthenticator
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username, email, password → user row with a fresh identity
//! 2. **Login**: username or email + password → 24h token
//! 3. **Refresh**: valid token → new token (30 days for desktop clients)
//!
//! Every authenticated request and every WebSocket admission resolves the
//! token's row id back to a user, so tokens of deleted users stop working.
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Invalid credentials return 401 (no information leakage)

/// User data model and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_user_id, login, refresh, register, search};
pub use sessions::JwtAuthenticator;
