//! Authentication test helpers

use callrelay::backend::auth::sessions::{create_token, SESSION_TTL};
use callrelay::backend::auth::users::create_user;
use callrelay::shared::UserIdentity;
use sqlx::SqlitePool;

/// Signing secret used by every test server
pub const TEST_SECRET: &str = "test-secret-key";

/// Test user credentials
#[derive(Debug, Clone)]
pub struct TestUser {
    pub row_id: i64,
    pub identity: UserIdentity,
    pub username: String,
    pub password: String,
    pub token: String,
}

/// Insert a user directly and sign a token for it
pub async fn create_test_user(pool: &SqlitePool, username: &str) -> TestUser {
    let password = "test_password_123".to_string();
    let password_hash = bcrypt::hash(&password, 4).expect("Failed to hash password");
    let identity = UserIdentity::generate();
    let user = create_user(
        pool,
        &identity,
        username,
        &format!("{username}@example.com"),
        &password_hash,
    )
    .await
    .expect("Failed to create test user");

    let token = create_token(user.id, TEST_SECRET, SESSION_TTL).expect("Failed to create token");

    TestUser {
        row_id: user.id,
        identity,
        username: username.to_string(),
        password,
        token,
    }
}

/// Link two test users as friends
pub async fn make_friends(pool: &SqlitePool, a: &TestUser, b: &TestUser) {
    callrelay::backend::friends::db::insert_friend(pool, &a.identity, &b.identity)
        .await
        .expect("Failed to link friends");
}
