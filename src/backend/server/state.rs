/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds:
 * - The SQLite pool and the loaded configuration
 * - The token verifier, both as its concrete type (for the HTTP middleware)
 *   and as the `Authenticator` trait object the relay admits sessions with
 * - The relay's delivery engine, which owns the connection registry
 * - The history store, for the history endpoint
 *
 * # Thread Safety
 *
 * Every field is cheap to clone and safe to share. The only mutable shared
 * state is the connection registry's `Arc<RwLock<HashMap<..>>>`.
 *
 * # Example
 *
 * ```rust,ignore
 * use callrelay::backend::relay::ConnectionRegistry;
 * use axum::extract::State;
 *
 * async fn handler(State(registry): State<ConnectionRegistry>) {
 *     let online = registry.len().await;
 * }
 * ```
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::backend::auth::sessions::JwtAuthenticator;
use crate::backend::friends::db::SqlRelationshipGraph;
use crate::backend::history::db::SqlHistoryStore;
use crate::backend::relay::{
    Authenticator, AuthorizationGate, ConnectionRegistry, DeliveryEngine,
};
use crate::backend::server::config::ServerConfig;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,

    /// Loaded configuration
    pub config: Arc<ServerConfig>,

    /// Token verifier used by the HTTP auth middleware
    pub jwt: JwtAuthenticator,

    /// Token verifier used at WebSocket admission
    pub authenticator: Arc<dyn Authenticator>,

    /// Relay delivery engine (owns the connection registry)
    pub engine: DeliveryEngine,

    /// Durable message log
    pub history: SqlHistoryStore,
}

impl AppState {
    /// Wire the production collaborators around `pool`
    pub fn new(config: ServerConfig, pool: SqlitePool) -> Self {
        let jwt = JwtAuthenticator::new(config.jwt_secret.clone(), pool.clone());
        let history = SqlHistoryStore::new(pool.clone());
        let gate = AuthorizationGate::new(Arc::new(SqlRelationshipGraph::new(pool.clone())));
        let engine = DeliveryEngine::new(gate, Arc::new(history.clone()), ConnectionRegistry::new());

        Self {
            pool,
            config: Arc::new(config),
            authenticator: Arc::new(jwt.clone()),
            jwt,
            engine,
            history,
        }
    }

    pub fn registry(&self) -> &ConnectionRegistry {
        self.engine.registry()
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}

impl FromRef<AppState> for JwtAuthenticator {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.jwt.clone()
    }
}

impl FromRef<AppState> for DeliveryEngine {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.engine.clone()
    }
}

impl FromRef<AppState> for ConnectionRegistry {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.engine.registry().clone()
    }
}

impl FromRef<AppState> for SqlHistoryStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.history.clone()
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
