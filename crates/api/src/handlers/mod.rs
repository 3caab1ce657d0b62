//! Request handlers.
//!
//! Handlers delegate to the [`ProductStore`](microcommerce_db::store::ProductStore)
//! held in [`AppState`](crate::state::AppState) and map errors via
//! [`AppError`](crate::error::AppError).

pub mod product;
