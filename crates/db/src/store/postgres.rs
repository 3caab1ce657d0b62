use async_trait::async_trait;
use microcommerce_core::types::{DbId, Price};

use super::ProductStore;
use crate::models::product::{CreateProduct, Product, SaveProduct};
use crate::repositories::ProductRepo;
use crate::DbPool;

/// PostgreSQL-backed product store.
#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: DbPool,
}

impl PgProductStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn find_all(&self) -> Result<Vec<Product>, sqlx::Error> {
        ProductRepo::list(&self.pool).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        ProductRepo::find_by_id(&self.pool, id).await
    }

    async fn create(&self, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        ProductRepo::create(&self.pool, input).await
    }

    async fn save(&self, input: &SaveProduct) -> Result<Product, sqlx::Error> {
        ProductRepo::save(&self.pool, input).await
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        ProductRepo::delete(&self.pool, id).await
    }

    async fn find_all_ordered_by_name(&self) -> Result<Vec<Product>, sqlx::Error> {
        ProductRepo::list_by_name(&self.pool).await
    }

    async fn find_priced_above(&self, threshold: Price) -> Result<Vec<Product>, sqlx::Error> {
        ProductRepo::list_priced_above(&self.pool, threshold).await
    }

    async fn ping(&self) -> bool {
        match crate::health_check(&self.pool).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Database health check failed");
                false
            }
        }
    }
}
