//! Persistence layer for the movie store.
//!
//! Owns the PostgreSQL connection pool, the `movies` row model, and the
//! repository that issues one parameterized statement per operation.

use sqlx::postgres::PgPoolOptions;

pub mod config;
pub mod models;
pub mod repositories;

pub use config::DbConfig;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from the given configuration.
///
/// Connects eagerly so an unreachable database fails at startup.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.connect_options())
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
