use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Product, ProductPage};
use crate::query::CatalogQuery;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product not found")]
    ProductNotFound,
    #[error("{0}")]
    Validation(String),
    #[error("unexpected catalog error: {0}")]
    Unexpected(String),
}

impl PartialEq for CatalogError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::ProductNotFound, Self::ProductNotFound) => true,
            (Self::Validation(a), Self::Validation(b)) => a == b,
            (Self::Unexpected(_), Self::Unexpected(_)) => true,
            _ => false,
        }
    }
}

/// Port over the product table. Read-only.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn list(&self, query: &CatalogQuery) -> Result<ProductPage, CatalogError>;
    async fn find_by_id(&self, id: &str) -> Result<Product, CatalogError>;
    /// Distinct categories, sorted ascending.
    async fn categories(&self) -> Result<Vec<String>, CatalogError>;
}
