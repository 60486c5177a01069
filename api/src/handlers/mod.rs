//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod accounts;
pub mod response;

pub use accounts::{create_account, delete_account, get_account, list_accounts, update_account};
