//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── register.rs - User registration
//! ├── login.rs    - Credential check and token issue
//! ├── refresh.rs  - Token refresh
//! └── me.rs       - Caller identity and user search
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register
//! - **`login`** - POST /api/auth/login
//! - **`refresh`** - POST /api/auth/refresh (authenticated)
//! - **`get_user_id`** - GET /api/user/id (authenticated)
//! - **`search`** - GET /api/users/search (authenticated)

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Token refresh handler
pub mod refresh;

/// Caller identity and search handlers
pub mod me;

pub use types::{LoginRequest, RegisterRequest, RegisterResponse, TokenResponse, UserIdResponse};

pub use login::login;
pub use me::{get_user_id, search};
pub use refresh::refresh;
pub use register::register;
