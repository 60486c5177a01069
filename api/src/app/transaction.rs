//! Transaction finalization
//!
//! Every use case ends by handing its transaction and its outcome to
//! [`finish`], which is the only place that decides between commit and
//! rollback.

use crate::domain::ports::StorageTransaction;
use crate::error::DomainError;

/// Commit `txn` if `result` is `Ok`, roll it back otherwise.
///
/// A failed commit turns a successful outcome into a storage error. A failed
/// rollback is logged and the original error is returned.
pub async fn finish<T, R>(txn: T, result: Result<R, DomainError>) -> Result<R, DomainError>
where
    T: StorageTransaction,
{
    match result {
        Ok(value) => {
            txn.commit().await.map_err(DomainError::Storage)?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::warn!(error = %rollback_err, cause = %e, "Rollback failed");
            }
            Err(e)
        }
    }
}
