/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration and
 * the SQLite connection pool.
 *
 * # Configuration Sources
 *
 * Configuration is read from environment variables (a `.env` file is
 * loaded by the binary before this runs):
 *
 * - `SECRET_KEY` - JWT signing secret (required)
 * - `ALLOW_ORIGINS` - comma-separated CORS allow-list (required)
 * - `DATABASE_URL` - SQLite URL (default `sqlite://data/callrelay.db?mode=rwc`)
 * - `SERVER_PORT` - listening port (default 8080)
 *
 * The resulting `ServerConfig` is passed explicitly into the components that
 * need it; nothing below the binary reads the environment.
 */

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Default database location, relative to the working directory
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/callrelay.db?mode=rwc";

/// Default listening port
pub const DEFAULT_PORT: u16 = 8080;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
    #[error("failed to prepare database directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),
    #[error("database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Secret used to sign and verify session tokens
    pub jwt_secret: String,
    /// Origins allowed by the CORS layer
    pub allow_origins: Vec<String>,
    /// SQLite connection URL
    pub database_url: String,
    /// Port the HTTP server listens on
    pub port: u16,
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(secret) = lookup("SECRET_KEY") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(origins) = lookup("ALLOW_ORIGINS") {
            builder = builder.allow_origins(
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect(),
            );
        }
        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(port) = lookup("SERVER_PORT") {
            let port = port.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                key: "SERVER_PORT",
                message: e.to_string(),
            })?;
            builder = builder.port(port);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("SECRET_KEY"));
        }
        if self.allow_origins.is_empty() {
            return Err(ConfigError::MissingValue("ALLOW_ORIGINS"));
        }
        if self.database_url.is_empty() {
            return Err(ConfigError::MissingValue("DATABASE_URL"));
        }
        Ok(())
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    jwt_secret: Option<String>,
    allow_origins: Vec<String>,
    database_url: Option<String>,
    port: Option<u16>,
}

impl ServerConfigBuilder {
    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the CORS allow-list
    pub fn allow_origins(mut self, origins: Vec<String>) -> Self {
        self.allow_origins = origins;
        self
    }

    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the listening port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let config = ServerConfig {
            jwt_secret: self
                .jwt_secret
                .ok_or(ConfigError::MissingValue("SECRET_KEY"))?,
            allow_origins: self.allow_origins,
            database_url: self
                .database_url
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            port: self.port.unwrap_or(DEFAULT_PORT),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Connect to SQLite and run migrations
///
/// File databases get their parent directory created first. In-memory
/// databases are pinned to a single connection that never expires, since
/// each SQLite connection would otherwise see its own empty database.
///
/// # Errors
///
/// Returns `ConfigError` if the directory cannot be created, the connection
/// fails, or migrations fail.
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, ConfigError> {
    let in_memory = database_url.contains(":memory:");

    if !in_memory {
        ensure_database_dir(database_url).await?;
    }

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    };

    tracing::info!("Connecting to database...");
    let pool = pool_options.connect_with(options).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database ready");

    Ok(pool)
}

/// Create the directory holding a file-backed SQLite database
async fn ensure_database_dir(database_url: &str) -> Result<(), ConfigError> {
    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    let path = path.split('?').next().unwrap_or(path);

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    Ok(())
}
