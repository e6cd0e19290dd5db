//! Database test fixtures
//!
//! Every fixture gets its own in-memory SQLite database with migrations
//! applied, so tests never share state.

use callrelay::backend::server::config::connect_database;
use sqlx::SqlitePool;

/// Test database fixture
pub struct TestDatabase {
    pool: SqlitePool,
}

impl TestDatabase {
    pub async fn new() -> Self {
        let pool = connect_database("sqlite::memory:")
            .await
            .expect("Failed to create test database");
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
