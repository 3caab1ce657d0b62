//! Domain types and pricing rules for the product catalogue.
//!
//! Nothing here touches the network or the database; the `db` and `api`
//! crates build on these types.

pub mod error;
pub mod pricing;
pub mod types;
