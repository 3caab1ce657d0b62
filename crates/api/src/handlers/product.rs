//! Handlers for the product catalogue and its reports.

use std::collections::BTreeMap;

use axum::extract::{OriginalUri, Path, State};
use axum::http::header::{HeaderName, LOCATION};
use axum::http::StatusCode;
use axum::Json;
use microcommerce_core::pricing::{ensure_not_free, margin_of, EXPENSIVE_PRODUCT_THRESHOLD};
use microcommerce_core::types::{DbId, Margin, Price};
use microcommerce_db::models::product::{CreateProduct, Product, ProductSummary, SaveProduct};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// One row of the margin report: `{ "<product description>": <margin> }`.
pub type MarginEntry = BTreeMap<String, Margin>;

/// GET /Produits
///
/// The purchase price is left out of every entry.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProductSummary>>> {
    let products = state.products.find_all().await?;
    Ok(Json(products.into_iter().map(ProductSummary::from).collect()))
}

/// GET /Produits/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Product>> {
    let product = state
        .products
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::product_not_found(id))?;
    Ok(Json(product))
}

/// POST /Produits
///
/// Negative prices fail field validation; a zero or missing price is rejected
/// as a free product. On success the body is empty and `Location` points at
/// the new resource. The `Location` value is a relative reference (request
/// path plus `/{id}`, e.g. `/Produits/7`), not an absolute URI with scheme and
/// host.
pub async fn create(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Json(input): Json<CreateProduct>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1])> {
    input.validate()?;
    ensure_not_free(input.price)?;

    let product = state.products.create(&input).await?;
    tracing::info!(id = product.id, name = %product.name, "Product created");

    let location = format!("{}/{}", uri.path().trim_end_matches('/'), product.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)]))
}

/// DELETE /Produits/{id}
///
/// Answers 200 with an empty body, whether or not the id existed.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = state.products.delete_by_id(id).await?;
    tracing::debug!(id, deleted, "Product delete");
    Ok(StatusCode::OK)
}

/// PUT /Produits
pub async fn update(
    State(state): State<AppState>,
    Json(input): Json<SaveProduct>,
) -> AppResult<StatusCode> {
    let product = state.products.save(&input).await?;
    tracing::info!(requested_id = ?input.id, id = product.id, "Product saved");
    Ok(StatusCode::OK)
}

/// GET /test/produits/{prix}
///
/// The path value is parsed but not used; the threshold is fixed.
pub async fn expensive(
    State(state): State<AppState>,
    Path(_prix): Path<Price>,
) -> AppResult<Json<Vec<Product>>> {
    let products = state
        .products
        .find_priced_above(EXPENSIVE_PRODUCT_THRESHOLD)
        .await?;
    Ok(Json(products))
}

/// GET /AdminProduits
pub async fn margins(State(state): State<AppState>) -> AppResult<Json<Vec<MarginEntry>>> {
    let products = state.products.find_all().await?;
    Ok(Json(margin_report(&products)))
}

/// GET /ProduitsAlpha
pub async fn list_alphabetical(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = state.products.find_all_ordered_by_name().await?;
    Ok(Json(products))
}

/// Build the margin report, one single-key entry per product, in input order.
pub fn margin_report(products: &[Product]) -> Vec<MarginEntry> {
    products
        .iter()
        .map(|p| BTreeMap::from([(p.to_string(), margin_of(p))]))
        .collect()
}
