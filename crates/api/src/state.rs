use std::sync::Arc;

use microcommerce_db::store::ProductStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Product data access (PostgreSQL or in-memory).
    pub products: Arc<dyn ProductStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
