//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides the production message store and the pool bootstrap:
//! - `PostgresMessageStore` - sqlx-backed implementation of `MessageStore`
//! - `connect` - explicit pool construction from `DatabaseConfig`

mod message_store;

pub use message_store::PostgresMessageStore;

use crate::config::DatabaseConfig;
use sqlx::postgres::{PgPool, PgPoolOptions};

/// Creates the process-wide PostgreSQL connection pool.
///
/// The pool is the single shared storage resource: construct it once at
/// process start, inject it into the store, and close it at shutdown.
/// Optionally runs pending migrations when the config asks for it.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(
        "Creating database pool: max={}, min={}, acquire_timeout={}s",
        config.max_connections,
        config.min_connections,
        config.acquire_timeout_secs,
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect(&config.url)
        .await?;

    if config.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    tracing::info!("Database pool ready");
    Ok(pool)
}
