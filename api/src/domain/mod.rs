//! Domain layer
//!
//! Ledger account model and the ports the application layer depends on.
//! - `entities`: the account entity and its request/response shapes
//! - `ports`: repository and transaction traits implemented by adapters

pub mod entities;
pub mod ports;
