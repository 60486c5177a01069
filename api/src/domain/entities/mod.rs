//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod account;

pub use account::{
    Account, AccountId, AccountResponse, CreateAccountRequest, UpdateAccountRequest,
};
