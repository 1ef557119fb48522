use std::cmp::Ordering;
use std::sync::Arc;

use crate::domain::{Product, ProductPage};
use crate::ports::{CatalogError, ProductStore};
use crate::query::{CatalogQuery, SortKey};

/// In-memory product store for tests and local development.
#[derive(Default, Clone)]
pub struct InMemoryProductStore {
    products: Arc<Vec<Product>>,
}

impl InMemoryProductStore {
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(products),
        }
    }
}

fn compare(a: &Product, b: &Product, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Price => a.price.total_cmp(&b.price),
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

#[async_trait::async_trait]
impl ProductStore for InMemoryProductStore {
    async fn list(&self, query: &CatalogQuery) -> Result<ProductPage, CatalogError> {
        let mut matches: Vec<Product> = self
            .products
            .iter()
            .filter(|product| {
                product.price >= query.min_price
                    && product.price <= query.max_price
                    && query
                        .category
                        .as_deref()
                        .is_none_or(|category| product.category == category)
            })
            .cloned()
            .collect();

        matches.sort_by(|a, b| {
            let ordering = compare(a, b, query.sort.key);
            if query.sort.descending {
                ordering.reverse()
            } else {
                ordering
            }
        });

        let total_items = matches.len() as u64;
        let total_pages = query.total_pages(total_items);

        let offset = usize::try_from(query.offset()).unwrap_or(usize::MAX);
        let items = matches
            .into_iter()
            .skip(offset)
            .take(query.size() as usize)
            .collect();

        Ok(ProductPage {
            items,
            total_items,
            total_pages,
        })
    }

    async fn find_by_id(&self, id: &str) -> Result<Product, CatalogError> {
        self.products
            .iter()
            .find(|product| product.id == id)
            .cloned()
            .ok_or(CatalogError::ProductNotFound)
    }

    async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        let mut categories: Vec<String> = self
            .products
            .iter()
            .map(|product| product.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }
}
