use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use microcommerce_core::pricing::{is_priced_above, sort_by_name};
use microcommerce_core::types::{DbId, Price};

use super::ProductStore;
use crate::models::product::{CreateProduct, Product, SaveProduct};

#[derive(Debug, Default)]
struct Inner {
    rows: BTreeMap<DbId, Product>,
    last_id: DbId,
}

impl Inner {
    fn insert(&mut self, input: &CreateProduct) -> Product {
        self.last_id += 1;
        let product = Product {
            id: self.last_id,
            name: input.name.clone(),
            price: input.price,
            purchase_price: input.purchase_price,
        };
        self.rows.insert(product.id, product.clone());
        product
    }
}

/// In-memory product store.
///
/// Ids are assigned sequentially from 1 and never reused, like a BIGSERIAL
/// column. Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<Inner>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find_all(&self) -> Result<Vec<Product>, sqlx::Error> {
        Ok(self.read().rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        Ok(self.read().rows.get(&id).cloned())
    }

    async fn create(&self, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        Ok(self.write().insert(input))
    }

    async fn save(&self, input: &SaveProduct) -> Result<Product, sqlx::Error> {
        let mut inner = self.write();
        if let Some(existing) = input.id.and_then(|id| inner.rows.get_mut(&id)) {
            existing.name = input.name.clone();
            existing.price = input.price;
            existing.purchase_price = input.purchase_price;
            return Ok(existing.clone());
        }
        Ok(inner.insert(&CreateProduct::from(input)))
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        Ok(self.write().rows.remove(&id).is_some())
    }

    async fn find_all_ordered_by_name(&self) -> Result<Vec<Product>, sqlx::Error> {
        let mut products: Vec<Product> = self.read().rows.values().cloned().collect();
        sort_by_name(&mut products);
        Ok(products)
    }

    async fn find_priced_above(&self, threshold: Price) -> Result<Vec<Product>, sqlx::Error> {
        Ok(self
            .read()
            .rows
            .values()
            .filter(|p| is_priced_above(*p, threshold))
            .cloned()
            .collect())
    }

    async fn ping(&self) -> bool {
        true
    }
}
