//! SeaORM entities
//!
//! Table mappings used by the SQL adapters. Domain code never sees these.

pub mod accounts;
