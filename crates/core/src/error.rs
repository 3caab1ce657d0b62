use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A product submitted with a sale price of zero.
    #[error("Free product rejected: {0}")]
    FreeProduct(String),
}
