//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., SeaORM over SQL).
//!
//! Repositories never open their own transactions implicitly: every data
//! operation runs against a transaction handle the caller obtained from
//! [`AccountRepository::begin`] and is responsible for finishing.

use async_trait::async_trait;

use crate::domain::entities::{Account, AccountId};
use crate::error::StorageError;

/// An open storage transaction
///
/// Dropping a handle without calling [`commit`](Self::commit) rolls it back.
#[async_trait]
pub trait StorageTransaction: Send {
    /// Make every write done through this handle durable
    async fn commit(self) -> Result<(), StorageError>;

    /// Discard every write done through this handle
    async fn rollback(self) -> Result<(), StorageError>;
}

/// Repository for Account entities
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    type Txn: StorageTransaction;

    /// Open a transaction at the store's default isolation level
    async fn begin(&self) -> Result<Self::Txn, StorageError>;

    /// Insert an account, returning it with the storage-assigned id
    async fn create(&self, txn: &mut Self::Txn, account: Account)
        -> Result<Account, StorageError>;

    /// Overwrite code, name and year of the row with `account.id`
    ///
    /// Returns the input unchanged. Matching no row is not an error.
    async fn update(&self, txn: &mut Self::Txn, account: Account)
        -> Result<Account, StorageError>;

    /// Remove the row with `id`. Matching no row is not an error.
    async fn delete(&self, txn: &mut Self::Txn, id: AccountId) -> Result<(), StorageError>;

    /// Find an account by id, failing with [`StorageError::NoRows`] on a miss
    async fn find_by_id(&self, txn: &mut Self::Txn, id: AccountId)
        -> Result<Account, StorageError>;

    /// All accounts ordered by id
    async fn find_all(&self, txn: &mut Self::Txn) -> Result<Vec<Account>, StorageError>;
}
