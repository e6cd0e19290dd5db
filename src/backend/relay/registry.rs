/**
 * Connection Registry
 *
 * The map from `UserIdentity` to that user's one live `Connection`.
 *
 * # Concurrency
 *
 * A single coarse `RwLock` guards the map. Registration and removal take the
 * write lock; lookups take the read lock. No operation holds the lock across
 * an await on anything other than the lock itself.
 *
 * # Ownership Rules
 *
 * Only the session that owns a connection registers or unregisters it. A
 * newer registration for the same identity replaces the older one, and the
 * older session's teardown must leave the newer entry alone; `unregister`
 * therefore compares connection instances, not identities.
 *
 * The one exception is a connection whose channel has closed: `lookup` and
 * `register` drop such entries as soon as they see them, so the map does not
 * keep a dead connection until its session finishes tearing down.
 */

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::backend::relay::connection::Connection;
use crate::shared::UserIdentity;

/// Shared registry of live connections
#[derive(Debug, Clone, Default)]
pub struct ConnectionRegistry {
    entries: Arc<RwLock<HashMap<UserIdentity, Connection>>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a connection, replacing any prior entry for its identity
    ///
    /// Returns the superseded connection, if there was one. Entries for other
    /// identities whose channels have closed are swept out at the same time.
    pub async fn register(&self, connection: Connection) -> Option<Connection> {
        let identity = connection.identity().clone();
        let superseded = {
            let mut entries = self.entries.write().await;
            entries.retain(|_, existing| !existing.is_closed());
            entries.insert(identity.clone(), connection)
        };

        if let Some(old) = &superseded {
            tracing::info!(
                "[Registry] {} reconnected, superseding connection {}",
                identity,
                old.id()
            );
        } else {
            tracing::debug!("[Registry] {} registered", identity);
        }
        superseded
    }

    /// Remove `connection` if it is still the registered one for its identity
    ///
    /// Returns whether an entry was removed. Calling this again, or with a
    /// connection that has since been superseded, is a no-op.
    pub async fn unregister(&self, connection: &Connection) -> bool {
        let mut entries = self.entries.write().await;
        let is_current = entries
            .get(connection.identity())
            .is_some_and(|current| current.same_instance(connection));

        if is_current {
            entries.remove(connection.identity());
            tracing::debug!("[Registry] {} unregistered", connection.identity());
        }
        is_current
    }

    /// The live connection for `identity`
    ///
    /// A registered connection whose writer has already stopped is reported
    /// as absent and dropped from the map, without waiting for its session
    /// to tear down.
    pub async fn lookup(&self, identity: &UserIdentity) -> Option<Connection> {
        let stale = {
            let entries = self.entries.read().await;
            let connection = entries.get(identity)?;
            if !connection.is_closed() {
                return Some(connection.clone());
            }
            connection.clone()
        };

        self.evict_if_closed(&stale).await;
        None
    }

    /// Remove `connection` if it is still registered and its channel is closed
    async fn evict_if_closed(&self, connection: &Connection) {
        let mut entries = self.entries.write().await;
        let evict = entries
            .get(connection.identity())
            .is_some_and(|current| current.same_instance(connection) && current.is_closed());

        if evict {
            entries.remove(connection.identity());
            tracing::debug!(
                "[Registry] Evicted closed connection {} for {}",
                connection.id(),
                connection.identity()
            );
        }
    }

    pub async fn is_online(&self, identity: &UserIdentity) -> bool {
        self.lookup(identity).await.is_some()
    }

    /// Number of registered entries
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
