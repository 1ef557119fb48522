pub mod in_memory_product_store;
pub mod postgres_product_store;

pub use in_memory_product_store::InMemoryProductStore;
pub use postgres_product_store::PostgresProductStore;
