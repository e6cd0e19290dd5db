/**
 * Collaborator Traits
 *
 * The relay core depends on three outside services. Each is an object-safe
 * async trait so the core can hold them as `Arc<dyn ..>` and tests can swap
 * in in-memory fakes.
 *
 * # Implementations
 *
 * - `Authenticator` - `backend::auth::sessions::JwtAuthenticator`
 * - `RelationshipGraph` - `backend::friends::db::SqlRelationshipGraph`
 * - `HistoryStore` - `backend::history::db::SqlHistoryStore`
 */

use async_trait::async_trait;

use crate::backend::error::{AuthFailure, BackendError};
use crate::shared::{RelayMessage, UserIdentity};

/// Turns a session token into the identity it was issued for
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn identity_for(&self, token: &str) -> Result<UserIdentity, AuthFailure>;
}

/// Read side of the friend graph
#[async_trait]
pub trait RelationshipGraph: Send + Sync {
    /// Whether `a` and `b` are linked, in either direction
    async fn linked(&self, a: &UserIdentity, b: &UserIdentity) -> Result<bool, BackendError>;
}

/// Durable message log
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Persist one message
    async fn append(&self, message: &RelayMessage) -> Result<(), BackendError>;

    /// All messages exchanged between `a` and `b`, oldest first
    async fn range_between(
        &self,
        a: &UserIdentity,
        b: &UserIdentity,
    ) -> Result<Vec<RelayMessage>, BackendError>;
}
