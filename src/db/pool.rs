//! Async PostgreSQL connection pool (diesel-async over bb8).

use std::time::Duration;

use diesel_async::pooled_connection::bb8::Pool;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::config::DatabaseConfig;
use crate::error::{AppError, AppResult};

/// bb8::Pool is an Arc internally, so cloning only bumps a refcount.
pub type AsyncDbPool = Pool<AsyncPgConnection>;

/// Builds the pool and opens `min_connections` connections up front, so an
/// unreachable database fails startup instead of the first request.
pub async fn establish_async_connection_pool(config: &DatabaseConfig) -> AppResult<AsyncDbPool> {
    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(&config.url);

    Pool::builder()
        .max_size(config.max_connections)
        .min_idle(Some(config.min_connections))
        .connection_timeout(Duration::from_secs(config.connection_timeout))
        .build(manager)
        .await
        .map_err(|e| AppError::ConnectionPool {
            source: anyhow::anyhow!("failed to build connection pool: {}", e),
        })
}

/// Builds the pool without connecting. Connections are opened on first use.
pub fn lazy_connection_pool(config: &DatabaseConfig) -> AsyncDbPool {
    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(&config.url);

    Pool::builder()
        .max_size(config.max_connections)
        .connection_timeout(Duration::from_secs(config.connection_timeout))
        .build_unchecked(manager)
}

/// Round-trips `SELECT 1` through a pooled connection.
pub async fn ping(pool: &AsyncDbPool) -> AppResult<()> {
    let mut conn = pool.get().await?;
    diesel::sql_query("SELECT 1").execute(&mut conn).await?;
    Ok(())
}
