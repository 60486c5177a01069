//! Schema bootstrap
//!
//! Creates the accounts table from its SeaORM entity when it does not exist.
//! Deployments that manage migrations externally disable this via `AUTO_MIGRATE`.

use sea_orm::{ConnectionTrait, DatabaseConnection, Schema};

use crate::entity::accounts;
use crate::error::StorageError;

pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), StorageError> {
    let backend = db.get_database_backend();
    let mut table = Schema::new(backend).create_table_from_entity(accounts::Entity);
    table.if_not_exists();

    db.execute(backend.build(&table)).await?;
    tracing::debug!(?backend, "Accounts schema ensured");

    Ok(())
}
