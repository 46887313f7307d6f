//! Persistence layer: database configuration, the process-wide client
//! provider, migrations, and the `patients` repository.

pub mod config;
pub mod models;
pub mod provider;
pub mod repositories;

pub use config::{AppEnvironment, ConnectionStrategy, DatabaseConfig, DbConfigError};
pub use provider::{build_pool, client, ClientRegistry};

pub type DbPool = sqlx::PgPool;

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
