//! Connection pool bootstrap.

use crate::error::DbError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

/// Connect to Postgres with sensible pool defaults.
///
/// # Errors
///
/// Returns `DbError::ConnectionFailed` if the pool cannot be established.
pub async fn connect_pool(database_url: &str, max_connections: u32) -> Result<PgPool, DbError> {
    tracing::info!(max_connections, "Connecting to database");

    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
        .map_err(DbError::ConnectionFailed)
}
