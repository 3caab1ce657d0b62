//! The product data-access contract used by the HTTP layer.
//!
//! Two implementations are provided:
//!
//! - [`PgProductStore`]: PostgreSQL, delegating to [`ProductRepo`](crate::repositories::ProductRepo).
//! - [`InMemoryProductStore`]: a lock-guarded map, for tests and local runs
//!   without a database.

mod in_memory;
mod postgres;

use async_trait::async_trait;
use microcommerce_core::types::{DbId, Price};

use crate::models::product::{CreateProduct, Product, SaveProduct};

pub use in_memory::InMemoryProductStore;
pub use postgres::PgProductStore;

/// Data-access operations over the product catalogue.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products in id order.
    async fn find_all(&self) -> Result<Vec<Product>, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, sqlx::Error>;

    /// Insert a new product with a store-assigned id.
    async fn create(&self, input: &CreateProduct) -> Result<Product, sqlx::Error>;

    /// Upsert: overwrite an existing id, otherwise insert as new.
    async fn save(&self, input: &SaveProduct) -> Result<Product, sqlx::Error>;

    /// Remove a product. Absent ids are not an error; returns whether a row went away.
    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// All products ordered by name ascending.
    async fn find_all_ordered_by_name(&self) -> Result<Vec<Product>, sqlx::Error>;

    /// Products whose sale price is strictly greater than `threshold`.
    async fn find_priced_above(&self, threshold: Price) -> Result<Vec<Product>, sqlx::Error>;

    /// Whether the backing storage is reachable.
    async fn ping(&self) -> bool;
}
