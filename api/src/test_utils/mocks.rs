//! Mock implementations of port traits
//!
//! In-memory repository with real transaction semantics: writes made through a
//! transaction are visible to that transaction only and reach the shared store
//! on commit. Counters and failure injection let tests verify how services
//! drive transactions.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Account, AccountId};
use crate::domain::ports::{AccountRepository, StorageTransaction};
use crate::error::StorageError;

type Rows = BTreeMap<AccountId, Account>;

/// Repository operation that can be made to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Begin,
    Create,
    Update,
    Delete,
    FindById,
    FindAll,
}

#[derive(Default)]
struct Counters {
    begins: AtomicUsize,
    commits: AtomicUsize,
    rollbacks: AtomicUsize,
    updates: AtomicUsize,
    deletes: AtomicUsize,
}

// ============================================================================
// In-Memory Account Repository
// ============================================================================

pub struct InMemoryAccountRepository {
    rows: Arc<RwLock<Rows>>,
    next_id: Arc<AtomicI64>,
    counters: Arc<Counters>,
    fail_on: Option<FailOn>,
    fail_commit: bool,
}

impl Default for InMemoryAccountRepository {
    fn default() -> Self {
        Self {
            rows: Arc::default(),
            next_id: Arc::new(AtomicI64::new(1)),
            counters: Arc::default(),
            fail_on: None,
            fail_commit: false,
        }
    }
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an account for testing
    pub fn with_account(self, account: Account) -> Self {
        self.next_id.fetch_max(account.id.0 + 1, Ordering::SeqCst);
        self.rows.write().unwrap().insert(account.id, account);
        self
    }

    /// Make every call of `op` fail with a database error
    pub fn failing_on(mut self, op: FailOn) -> Self {
        self.fail_on = Some(op);
        self
    }

    /// Make every commit fail with a database error
    pub fn failing_commit(mut self) -> Self {
        self.fail_commit = true;
        self
    }

    /// Committed state of one account
    pub fn get(&self, id: AccountId) -> Option<Account> {
        self.rows.read().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn begins(&self) -> usize {
        self.counters.begins.load(Ordering::SeqCst)
    }

    pub fn commits(&self) -> usize {
        self.counters.commits.load(Ordering::SeqCst)
    }

    pub fn rollbacks(&self) -> usize {
        self.counters.rollbacks.load(Ordering::SeqCst)
    }

    /// Number of `update` calls, successful or not
    pub fn updates(&self) -> usize {
        self.counters.updates.load(Ordering::SeqCst)
    }

    /// Number of `delete` calls, successful or not
    pub fn deletes(&self) -> usize {
        self.counters.deletes.load(Ordering::SeqCst)
    }

    fn check(&self, op: FailOn) -> Result<(), StorageError> {
        if self.fail_on == Some(op) {
            return Err(StorageError::Database(format!("injected failure on {:?}", op)));
        }
        Ok(())
    }
}

enum PendingWrite {
    Put(Account),
    Remove(AccountId),
}

/// Transaction over the in-memory store
///
/// Dropping it without a commit discards its writes and counts as a rollback.
pub struct InMemoryTransaction {
    shared: Arc<RwLock<Rows>>,
    working: Rows,
    pending: Vec<PendingWrite>,
    counters: Arc<Counters>,
    fail_commit: bool,
    finished: bool,
}

impl InMemoryTransaction {
    fn ensure_unique_code(&self, account: &Account) -> Result<(), StorageError> {
        let taken = self
            .working
            .values()
            .any(|a| a.code == account.code && a.id != account.id);
        if taken {
            return Err(StorageError::Database(format!(
                "UNIQUE constraint failed: code {}",
                account.code
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl StorageTransaction for InMemoryTransaction {
    async fn commit(mut self) -> Result<(), StorageError> {
        if self.fail_commit {
            return Err(StorageError::Database("injected commit failure".to_string()));
        }

        let mut shared = self.shared.write().unwrap();
        for write in std::mem::take(&mut self.pending) {
            match write {
                PendingWrite::Put(account) => {
                    shared.insert(account.id, account);
                }
                PendingWrite::Remove(id) => {
                    shared.remove(&id);
                }
            }
        }
        drop(shared);

        self.finished = true;
        self.counters.commits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn rollback(mut self) -> Result<(), StorageError> {
        self.finished = true;
        self.counters.rollbacks.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

impl Drop for InMemoryTransaction {
    fn drop(&mut self) {
        if !self.finished {
            self.counters.rollbacks.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    type Txn = InMemoryTransaction;

    async fn begin(&self) -> Result<InMemoryTransaction, StorageError> {
        self.check(FailOn::Begin)?;
        self.counters.begins.fetch_add(1, Ordering::SeqCst);

        Ok(InMemoryTransaction {
            shared: self.rows.clone(),
            working: self.rows.read().unwrap().clone(),
            pending: Vec::new(),
            counters: self.counters.clone(),
            fail_commit: self.fail_commit,
            finished: false,
        })
    }

    async fn create(
        &self,
        txn: &mut InMemoryTransaction,
        mut account: Account,
    ) -> Result<Account, StorageError> {
        self.check(FailOn::Create)?;
        txn.ensure_unique_code(&account)?;

        account.id = AccountId(self.next_id.fetch_add(1, Ordering::SeqCst));
        txn.working.insert(account.id, account.clone());
        txn.pending.push(PendingWrite::Put(account.clone()));

        Ok(account)
    }

    async fn update(
        &self,
        txn: &mut InMemoryTransaction,
        account: Account,
    ) -> Result<Account, StorageError> {
        self.counters.updates.fetch_add(1, Ordering::SeqCst);
        self.check(FailOn::Update)?;

        if txn.working.contains_key(&account.id) {
            txn.ensure_unique_code(&account)?;
            txn.working.insert(account.id, account.clone());
            txn.pending.push(PendingWrite::Put(account.clone()));
        }

        Ok(account)
    }

    async fn delete(&self, txn: &mut InMemoryTransaction, id: AccountId) -> Result<(), StorageError> {
        self.counters.deletes.fetch_add(1, Ordering::SeqCst);
        self.check(FailOn::Delete)?;

        if txn.working.remove(&id).is_some() {
            txn.pending.push(PendingWrite::Remove(id));
        }

        Ok(())
    }

    async fn find_by_id(
        &self,
        txn: &mut InMemoryTransaction,
        id: AccountId,
    ) -> Result<Account, StorageError> {
        self.check(FailOn::FindById)?;
        txn.working.get(&id).cloned().ok_or(StorageError::NoRows)
    }

    async fn find_all(&self, txn: &mut InMemoryTransaction) -> Result<Vec<Account>, StorageError> {
        self.check(FailOn::FindAll)?;
        Ok(txn.working.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_account;

    #[tokio::test]
    async fn writes_are_invisible_until_commit() {
        let repo = InMemoryAccountRepository::new();

        let mut txn = repo.begin().await.unwrap();
        let created = repo
            .create(&mut txn, Account::new("411".into(), "Pajak".into(), "2024".into()))
            .await
            .unwrap();
        assert!(repo.is_empty());

        txn.commit().await.unwrap();
        assert_eq!(repo.get(created.id), Some(created));
    }

    #[tokio::test]
    async fn dropped_transaction_counts_as_rollback() {
        let repo = InMemoryAccountRepository::new().with_account(test_account(1));

        {
            let mut txn = repo.begin().await.unwrap();
            repo.delete(&mut txn, AccountId(1)).await.unwrap();
        }

        assert_eq!(repo.rollbacks(), 1);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn ids_continue_after_seeded_accounts() {
        let repo = InMemoryAccountRepository::new().with_account(test_account(5));

        let mut txn = repo.begin().await.unwrap();
        let created = repo
            .create(&mut txn, Account::new("499".into(), "Lain-lain".into(), "2024".into()))
            .await
            .unwrap();

        assert_eq!(created.id, AccountId(6));
    }
}
