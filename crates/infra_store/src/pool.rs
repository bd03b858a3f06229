//! PostgreSQL connection pool setup

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

/// Creates a connection pool for the record store
pub async fn connect_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(30))
        .connect(database_url)
        .await?;

    tracing::info!("Database connection established");
    Ok(pool)
}
