//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate request validation, storage transactions and ports.

pub mod account_service;
pub mod transaction;

pub use account_service::AccountService;
