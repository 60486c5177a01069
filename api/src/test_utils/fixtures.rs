//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{Account, AccountId, CreateAccountRequest, UpdateAccountRequest};

/// Create a persisted-looking account with a code derived from its id
pub fn test_account(id: i64) -> Account {
    Account {
        id: AccountId(id),
        code: (410 + id).to_string(),
        name: Some(format!("Account {}", id)),
        year: "2024".to_string(),
    }
}

pub fn create_request(code: &str, name: &str, year: &str) -> CreateAccountRequest {
    CreateAccountRequest {
        code: code.to_string(),
        name: name.to_string(),
        year: year.to_string(),
    }
}

pub fn update_request(id: i64, code: &str, name: &str, year: &str) -> UpdateAccountRequest {
    UpdateAccountRequest {
        id: AccountId(id),
        code: code.to_string(),
        name: name.to_string(),
        year: year.to_string(),
    }
}
