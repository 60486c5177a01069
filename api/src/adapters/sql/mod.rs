//! SQL adapters
//!
//! Implementations of repository traits using SeaORM. The backend (PostgreSQL,
//! MySQL or SQLite) is chosen by the scheme of the connection URL.

pub mod account_repo;
pub mod schema;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::Config;
use crate::error::StorageError;

pub use account_repo::SqlAccountRepository;
pub use schema::ensure_schema;

/// Open the shared connection pool
pub async fn connect(config: &Config) -> Result<DatabaseConnection, StorageError> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.database_max_connections)
        .acquire_timeout(config.database_acquire_timeout)
        .sqlx_logging(false);

    Ok(Database::connect(options).await?)
}

/// Fresh in-memory SQLite database with the schema applied
#[cfg(test)]
pub(crate) async fn test_database() -> DatabaseConnection {
    // A single pooled connection keeps the in-memory database alive and shared
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory database");
    ensure_schema(&db)
        .await
        .expect("Failed to create test schema");
    db
}
