/**
 * Server Initialization
 *
 * # Initialization Process
 *
 * 1. Connect to SQLite (creating the data directory) and run migrations
 * 2. Build `AppState` around the pool and configuration
 * 3. Create the router with all routes and middleware
 *
 * A database that cannot be opened or migrated is fatal.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{connect_database, ConfigError, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns `ConfigError` if the database cannot be opened or migrated.
pub async fn create_app(config: ServerConfig) -> Result<Router<()>, ConfigError> {
    tracing::info!("Initializing callrelay backend server");

    let pool = connect_database(&config.database_url).await?;
    let app_state = AppState::new(config, pool);

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}
