//! Database access: connection pool and embedded migrations.

mod migrations;
mod pool;

pub use migrations::{pending_migrations, revert_migrations, run_pending_migrations, MIGRATIONS};
pub use pool::{establish_async_connection_pool, lazy_connection_pool, ping, AsyncDbPool};
