//! Account domain entity
//!
//! An account is a ledger code (chart-of-accounts entry) scoped to a fiscal year.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Storage-assigned identifier for an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub i64);

impl AccountId {
    /// Identifier of an account that has not been persisted yet
    pub const UNSET: AccountId = AccountId(0);
}

impl Default for AccountId {
    fn default() -> Self {
        Self::UNSET
    }
}

impl From<i64> for AccountId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A ledger account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    /// Business key, unique across the table
    pub code: String,
    pub name: Option<String>,
    /// Fiscal year the code belongs to
    pub year: String,
}

impl Account {
    /// Build an account that has not been persisted yet
    pub fn new(code: String, name: String, year: String) -> Self {
        Self {
            id: AccountId::UNSET,
            code,
            name: Some(name),
            year,
        }
    }
}

/// Input for creating an account
///
/// Missing fields decode to empty strings so the validator can report them.
/// Keys are `kode_rekening`, `nama_rekening` and `tahun`; `code`, `name` and
/// `year` are accepted too.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateAccountRequest {
    #[serde(default, rename = "kode_rekening", alias = "code")]
    #[validate(length(min = 1))]
    pub code: String,

    #[serde(default, rename = "nama_rekening", alias = "name")]
    #[validate(length(min = 1))]
    pub name: String,

    #[serde(default, rename = "tahun", alias = "year")]
    #[validate(length(min = 1))]
    pub year: String,
}

/// Input for replacing an account's fields
///
/// The id is taken from the request path, never from the body.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAccountRequest {
    #[serde(skip_deserializing)]
    pub id: AccountId,

    #[serde(default, rename = "kode_rekening", alias = "code")]
    #[validate(length(min = 1))]
    pub code: String,

    #[serde(default, rename = "nama_rekening", alias = "name")]
    #[validate(length(min = 1))]
    pub name: String,

    #[serde(default, rename = "tahun", alias = "year")]
    #[validate(length(min = 1))]
    pub year: String,
}

/// Outward representation of an account
///
/// Serialized with the same `kode_rekening`, `nama_rekening` and `tahun` keys
/// the requests use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: AccountId,
    #[serde(rename = "kode_rekening")]
    pub code: String,
    #[serde(rename = "nama_rekening")]
    pub name: Option<String>,
    #[serde(rename = "tahun")]
    pub year: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        AccountResponse {
            id: account.id,
            code: account.code,
            name: account.name,
            year: account.year,
        }
    }
}
