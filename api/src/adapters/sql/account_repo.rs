//! SQL adapter for AccountRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::domain::entities::{Account, AccountId};
use crate::domain::ports::{AccountRepository, StorageTransaction};
use crate::entity::accounts;
use crate::error::StorageError;

/// SeaORM implementation of AccountRepository
pub struct SqlAccountRepository {
    db: DatabaseConnection,
}

impl SqlAccountRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StorageTransaction for DatabaseTransaction {
    async fn commit(self) -> Result<(), StorageError> {
        DatabaseTransaction::commit(self).await?;
        Ok(())
    }

    async fn rollback(self) -> Result<(), StorageError> {
        DatabaseTransaction::rollback(self).await?;
        Ok(())
    }
}

#[async_trait]
impl AccountRepository for SqlAccountRepository {
    type Txn = DatabaseTransaction;

    async fn begin(&self) -> Result<DatabaseTransaction, StorageError> {
        Ok(self.db.begin().await?)
    }

    async fn create(
        &self,
        txn: &mut DatabaseTransaction,
        mut account: Account,
    ) -> Result<Account, StorageError> {
        let model = accounts::ActiveModel {
            id: NotSet,
            code: Set(account.code.clone()),
            name: Set(account.name.clone()),
            year: Set(account.year.clone()),
        };

        let result = accounts::Entity::insert(model).exec(&*txn).await?;
        account.id = AccountId(result.last_insert_id);

        Ok(account)
    }

    async fn update(
        &self,
        txn: &mut DatabaseTransaction,
        account: Account,
    ) -> Result<Account, StorageError> {
        let model = accounts::ActiveModel {
            id: NotSet,
            code: Set(account.code.clone()),
            name: Set(account.name.clone()),
            year: Set(account.year.clone()),
        };

        let result = accounts::Entity::update_many()
            .set(model)
            .filter(accounts::Column::Id.eq(account.id.0))
            .exec(&*txn)
            .await?;

        if result.rows_affected == 0 {
            tracing::warn!(account_id = %account.id, "Update matched no rows");
        }

        Ok(account)
    }

    async fn delete(&self, txn: &mut DatabaseTransaction, id: AccountId) -> Result<(), StorageError> {
        let result = accounts::Entity::delete_by_id(id.0).exec(&*txn).await?;

        if result.rows_affected == 0 {
            tracing::warn!(account_id = %id, "Delete matched no rows");
        }

        Ok(())
    }

    async fn find_by_id(
        &self,
        txn: &mut DatabaseTransaction,
        id: AccountId,
    ) -> Result<Account, StorageError> {
        accounts::Entity::find_by_id(id.0)
            .one(&*txn)
            .await?
            .map(Account::from)
            .ok_or(StorageError::NoRows)
    }

    async fn find_all(&self, txn: &mut DatabaseTransaction) -> Result<Vec<Account>, StorageError> {
        let results = accounts::Entity::find()
            .order_by_asc(accounts::Column::Id)
            .all(&*txn)
            .await?;

        Ok(results.into_iter().map(Account::from).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<accounts::Model> for Account {
    fn from(model: accounts::Model) -> Self {
        Account {
            id: AccountId(model.id),
            code: model.code,
            name: model.name,
            year: model.year,
        }
    }
}
