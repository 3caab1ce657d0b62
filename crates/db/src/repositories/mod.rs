//! Static repositories, one per table. Each takes a `&PgPool` per call.

pub mod product_repo;

pub use product_repo::ProductRepo;
