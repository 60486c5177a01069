//! Account service
//!
//! Create, update, delete and lookup of ledger accounts. Each use case runs in
//! exactly one storage transaction, opened after request validation and
//! finished by [`transaction::finish`].

use std::sync::Arc;

use validator::Validate;

use crate::app::transaction;
use crate::domain::entities::{
    Account, AccountId, AccountResponse, CreateAccountRequest, UpdateAccountRequest,
};
use crate::domain::ports::AccountRepository;
use crate::error::{DomainError, StorageError};

/// Lookup remap where a miss means the account does not exist
fn account_lookup(id: AccountId) -> impl FnOnce(StorageError) -> DomainError {
    move |e| DomainError::not_found_on_no_rows(e, format!("Account with ID: {} not found.", id))
}

/// Service for managing accounts
pub struct AccountService<AR>
where
    AR: AccountRepository,
{
    accounts: Arc<AR>,
}

impl<AR> AccountService<AR>
where
    AR: AccountRepository,
{
    pub fn new(accounts: Arc<AR>) -> Self {
        Self { accounts }
    }

    /// Create a new account
    pub async fn create(&self, request: CreateAccountRequest) -> Result<AccountResponse, DomainError> {
        request.validate()?;
        tracing::debug!(code = %request.code, "Creating account");

        let mut txn = self.accounts.begin().await?;
        let account = Account::new(request.code, request.name, request.year);
        let result = self
            .accounts
            .create(&mut txn, account)
            .await
            .map_err(DomainError::from);

        let created = transaction::finish(txn, result).await?;
        tracing::info!(account_id = %created.id, "Account created");

        Ok(created.into())
    }

    /// Replace code, name and year of an existing account
    ///
    /// The existence check and the write share one transaction, so an update
    /// on an unknown id fails with `NotFound` instead of silently succeeding.
    pub async fn update(&self, request: UpdateAccountRequest) -> Result<AccountResponse, DomainError> {
        request.validate()?;
        tracing::debug!(account_id = %request.id, "Updating account");

        let mut txn = self.accounts.begin().await?;
        let result = self.update_in(&mut txn, request).await;

        let updated = transaction::finish(txn, result).await?;
        tracing::info!(account_id = %updated.id, "Account updated");

        Ok(updated.into())
    }

    async fn update_in(
        &self,
        txn: &mut AR::Txn,
        request: UpdateAccountRequest,
    ) -> Result<Account, DomainError> {
        self.accounts
            .find_by_id(txn, request.id)
            .await
            .map_err(account_lookup(request.id))?;

        let account = Account {
            id: request.id,
            code: request.code,
            name: Some(request.name),
            year: request.year,
        };

        Ok(self.accounts.update(txn, account).await?)
    }

    /// Delete an existing account
    pub async fn delete(&self, id: AccountId) -> Result<(), DomainError> {
        tracing::debug!(account_id = %id, "Deleting account");

        let mut txn = self.accounts.begin().await?;
        let result = self.delete_in(&mut txn, id).await;

        transaction::finish(txn, result).await?;
        tracing::info!(account_id = %id, "Account deleted");

        Ok(())
    }

    async fn delete_in(&self, txn: &mut AR::Txn, id: AccountId) -> Result<(), DomainError> {
        self.accounts
            .find_by_id(txn, id)
            .await
            .map_err(account_lookup(id))?;

        Ok(self.accounts.delete(txn, id).await?)
    }

    /// Find an account by ID
    pub async fn find_by_id(&self, id: AccountId) -> Result<AccountResponse, DomainError> {
        let mut txn = self.accounts.begin().await?;
        let result = self
            .accounts
            .find_by_id(&mut txn, id)
            .await
            .map_err(account_lookup(id));

        Ok(transaction::finish(txn, result).await?.into())
    }

    /// List every account
    pub async fn find_all(&self) -> Result<Vec<AccountResponse>, DomainError> {
        let mut txn = self.accounts.begin().await?;
        let result = self
            .accounts
            .find_all(&mut txn)
            .await
            .map_err(DomainError::from);

        let accounts = transaction::finish(txn, result).await?;
        Ok(accounts.into_iter().map(AccountResponse::from).collect())
    }
}
