use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::domain::{Product, ProductPage};
use crate::ports::{CatalogError, ProductStore};
use crate::query::CatalogQuery;

/// Product store backed by PostgreSQL.
///
/// The ORDER BY column comes from the closed [`SortKey`] enum, never from
/// caller text, so interpolating it into the statement is safe.
///
/// [`SortKey`]: crate::query::SortKey
#[derive(Clone)]
pub struct PostgresProductStore {
    pool: PgPool,
}

impl PostgresProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_product(row: &PgRow) -> Result<Product, CatalogError> {
    fn get<'r, T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>>(
        row: &'r PgRow,
        column: &str,
    ) -> Result<T, CatalogError> {
        row.try_get(column)
            .map_err(|e| CatalogError::Unexpected(e.to_string()))
    }

    Ok(Product {
        id: get(row, "id")?,
        name: get(row, "name")?,
        description: get(row, "description")?,
        price: get(row, "price")?,
        category: get(row, "category")?,
        stock_quantity: get(row, "stock_quantity")?,
        image_url: get::<Option<String>>(row, "image_url")?,
        is_available: get(row, "is_available")?,
        created_at: get::<DateTime<Utc>>(row, "created_at")?,
        updated_at: get::<DateTime<Utc>>(row, "updated_at")?,
    })
}

const PRODUCT_COLUMNS: &str = "id, name, description, price, category, stock_quantity, \
                               image_url, is_available, created_at, updated_at";

#[async_trait::async_trait]
impl ProductStore for PostgresProductStore {
    #[tracing::instrument(name = "Listing products from PostgreSQL", skip_all)]
    async fn list(&self, query: &CatalogQuery) -> Result<ProductPage, CatalogError> {
        let filter = "price >= $1 AND price <= $2 AND ($3::text IS NULL OR category = $3)";

        let count_row = sqlx::query(&format!("SELECT COUNT(*) FROM products WHERE {filter}"))
            .bind(query.min_price)
            .bind(query.max_price)
            .bind(query.category.as_deref())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| CatalogError::Unexpected(e.to_string()))?;
        let total_items: i64 = count_row
            .try_get(0)
            .map_err(|e| CatalogError::Unexpected(e.to_string()))?;

        let direction = if query.sort.descending { "DESC" } else { "ASC" };
        let statement = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE {filter} \
             ORDER BY {column} {direction} LIMIT $4 OFFSET $5",
            column = query.sort.key.column(),
        );

        let rows = sqlx::query(&statement)
            .bind(query.min_price)
            .bind(query.max_price)
            .bind(query.category.as_deref())
            .bind(query.limit())
            .bind(query.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| CatalogError::Unexpected(e.to_string()))?;

        let items = rows
            .iter()
            .map(row_to_product)
            .collect::<Result<Vec<_>, _>>()?;

        let total_items = u64::try_from(total_items).unwrap_or(0);
        Ok(ProductPage {
            items,
            total_items,
            total_pages: query.total_pages(total_items),
        })
    }

    #[tracing::instrument(name = "Retrieving product from PostgreSQL", skip_all)]
    async fn find_by_id(&self, id: &str) -> Result<Product, CatalogError> {
        let row = sqlx::query(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CatalogError::Unexpected(e.to_string()))?;

        let Some(row) = row else {
            return Err(CatalogError::ProductNotFound);
        };
        row_to_product(&row)
    }

    #[tracing::instrument(name = "Listing product categories from PostgreSQL", skip_all)]
    async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        let rows = sqlx::query("SELECT DISTINCT category FROM products ORDER BY category")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| CatalogError::Unexpected(e.to_string()))?;

        rows.iter()
            .map(|row| {
                row.try_get(0)
                    .map_err(|e| CatalogError::Unexpected(e.to_string()))
            })
            .collect()
    }
}
