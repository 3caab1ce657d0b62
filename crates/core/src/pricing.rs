//! Pricing rules shared by the store implementations and HTTP handlers.
//!
//! Provides the sale-price check applied on creation, the margin formula
//! used by the admin report, and the name ordering used by the
//! alphabetical listing.

use crate::error::CoreError;
use crate::types::{Margin, Price};

/// Threshold used by the fixed "expensive products" query.
pub const EXPENSIVE_PRODUCT_THRESHOLD: Price = 400;

/// Message attached to [`CoreError::FreeProduct`].
pub const FREE_PRODUCT_MESSAGE: &str = "Sale price must be strictly greater than 0";

/// Anything that carries a name, a sale price and a purchase price.
pub trait PricedItem {
    fn name(&self) -> &str;
    fn price(&self) -> Price;
    fn purchase_price(&self) -> Price;
}

/// Reject a sale price of exactly zero.
///
/// Negative prices are caught earlier by field-level validation, so only the
/// zero case is handled here.
pub fn ensure_not_free(price: Price) -> Result<(), CoreError> {
    if price == 0 {
        return Err(CoreError::FreeProduct(FREE_PRODUCT_MESSAGE.to_string()));
    }
    Ok(())
}

/// Sale price minus purchase price, widened to avoid `i32` overflow.
pub fn margin(price: Price, purchase_price: Price) -> Margin {
    Margin::from(price) - Margin::from(purchase_price)
}

/// Margin of a single item.
pub fn margin_of<T: PricedItem>(item: &T) -> Margin {
    margin(item.price(), item.purchase_price())
}

/// Stable sort by name, ascending, comparing names byte-wise.
pub fn sort_by_name<T: PricedItem>(items: &mut [T]) {
    items.sort_by(|a, b| a.name().cmp(b.name()));
}

/// Whether an item is priced strictly above `threshold`.
pub fn is_priced_above<T: PricedItem>(item: &T, threshold: Price) -> bool {
    item.price() > threshold
}
