//! Product entity model and DTOs.
//!
//! Wire names follow the public API (`nom`, `prix`, `prixAchat`); the English
//! names are accepted as aliases on input.

use std::fmt;

use microcommerce_core::pricing::PricedItem;
use microcommerce_core::types::{DbId, Price};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A product row from the `products` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "prix")]
    pub price: Price,
    #[serde(rename = "prixAchat")]
    pub purchase_price: Price,
}

/// Human-readable description, used as the key of the margin report.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product{{id={}, nom='{}', prix={}}}",
            self.id, self.name, self.price
        )
    }
}

impl PricedItem for Product {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> Price {
        self.price
    }

    fn purchase_price(&self) -> Price {
        self.purchase_price
    }
}

/// Public listing view of a product. The purchase price is never exposed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductSummary {
    pub id: DbId,
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "prix")]
    pub price: Price,
}

impl From<Product> for ProductSummary {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
        }
    }
}

/// DTO for creating a new product. Any `id` in the body is ignored.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProduct {
    #[serde(rename = "nom", alias = "name")]
    pub name: String,
    /// A missing price reads as 0 and is then rejected as a free product.
    #[serde(rename = "prix", alias = "price", default)]
    #[validate(range(min = 0, message = "sale price must not be negative"))]
    pub price: Price,
    /// Defaults to 0 if omitted.
    #[serde(rename = "prixAchat", alias = "purchasePrice", default)]
    pub purchase_price: Price,
}

/// DTO for `PUT /Produits`. Saved as-is: an existing `id` is overwritten,
/// a missing or unknown `id` results in a new row.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveProduct {
    #[serde(default)]
    pub id: Option<DbId>,
    #[serde(rename = "nom", alias = "name")]
    pub name: String,
    #[serde(rename = "prix", alias = "price", default)]
    pub price: Price,
    #[serde(rename = "prixAchat", alias = "purchasePrice", default)]
    pub purchase_price: Price,
}

impl From<&SaveProduct> for CreateProduct {
    fn from(input: &SaveProduct) -> Self {
        Self {
            name: input.name.clone(),
            price: input.price,
            purchase_price: input.purchase_price,
        }
    }
}
