//! Product catalog service: a paginated, filterable, sortable read-only
//! view over the product table. Pure query translation - the only
//! invariants here are correct offset/limit/sort arithmetic.

pub mod domain;
pub mod persistence;
pub mod ports;
pub mod query;
pub mod routes;
pub mod service;

pub use domain::{Product, ProductPage};
pub use persistence::{InMemoryProductStore, PostgresProductStore};
pub use ports::{CatalogError, ProductStore};
pub use query::{CatalogQuery, SortKey, SortSpec};
pub use service::CatalogService;
