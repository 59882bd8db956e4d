//! Persistence for drafts and their published catalog copies.
//!
//! [`store::FormStore`] is the seam the API depends on. [`PgFormStore`] backs
//! it with Postgres through the zero-sized repositories in
//! [`repositories`]; [`MemoryFormStore`] keeps everything in process.

use sqlx::postgres::PgPoolOptions;

pub mod memory_store;
pub mod models;
pub mod pg_store;
pub mod repositories;
pub mod store;

pub use memory_store::MemoryFormStore;
pub use pg_store::PgFormStore;
pub use store::{DraftRevision, FormStore, StoreError};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
