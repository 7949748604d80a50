use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

/// A few concurrent browser sessions at most, so the pool stays small.
/// Session state (the current profile variable) survives a connection's
/// return to the pool; every request must set its own profile before
/// querying.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url)
        .await
}
