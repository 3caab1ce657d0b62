//! Repository for the `products` table.

use microcommerce_core::types::{DbId, Price};
use sqlx::PgPool;

use crate::models::product::{CreateProduct, Product, SaveProduct};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, price, purchase_price";

/// Provides CRUD and reporting queries for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (name, price, purchase_price)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(input.price)
            .bind(input.purchase_price)
            .fetch_one(pool)
            .await
    }

    /// Find a product by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all products in insertion (id) order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id ASC");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// List all products ordered by name ascending, byte-wise, ties by id.
    pub async fn list_by_name(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM products ORDER BY name COLLATE \"C\" ASC, id ASC");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// List products whose sale price is strictly greater than `threshold`.
    pub async fn list_priced_above(
        pool: &PgPool,
        threshold: Price,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE price > $1 ORDER BY id ASC");
        sqlx::query_as::<_, Product>(&query)
            .bind(threshold)
            .fetch_all(pool)
            .await
    }

    /// Overwrite every field of an existing product.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &SaveProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                name = $2,
                price = $3,
                purchase_price = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.price)
            .bind(input.purchase_price)
            .fetch_optional(pool)
            .await
    }

    /// Save a product as-is.
    ///
    /// Updates the row when `input.id` names an existing product; otherwise
    /// inserts a new row with a freshly generated id.
    pub async fn save(pool: &PgPool, input: &SaveProduct) -> Result<Product, sqlx::Error> {
        if let Some(id) = input.id {
            if let Some(product) = Self::update(pool, id, input).await? {
                return Ok(product);
            }
            tracing::debug!(id, "Save target missing, inserting new product");
        }
        Self::create(pool, &CreateProduct::from(input)).await
    }

    /// Delete a product by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
