//! Route definitions for the product catalogue.

use axum::routing::get;
use axum::Router;

use crate::handlers::product;
use crate::state::AppState;

/// Product routes, mounted at the root.
///
/// ```text
/// GET    /Produits                 -> list (no purchase price)
/// POST   /Produits                 -> create
/// PUT    /Produits                 -> update
/// GET    /Produits/{id}            -> get_by_id
/// DELETE /Produits/{id}            -> delete
/// GET    /test/produits/{prix}     -> expensive
/// GET    /AdminProduits            -> margins
/// GET    /ProduitsAlpha            -> list_alphabetical
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/Produits",
            get(product::list)
                .post(product::create)
                .put(product::update),
        )
        .route(
            "/Produits/{id}",
            get(product::get_by_id).delete(product::delete),
        )
        .route("/test/produits/{prix}", get(product::expensive))
        .route("/AdminProduits", get(product::margins))
        .route("/ProduitsAlpha", get(product::list_alphabetical))
}
