//! Axum routes for the catalog service.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Product, ProductPage};
use crate::ports::{CatalogError, ProductStore};
use crate::query::{CatalogQuery, DEFAULT_MAX_PRICE, DEFAULT_PAGE_SIZE};

#[derive(Debug, Deserialize)]
pub struct ProductListParams {
    pub category: Option<String>,
    #[serde(rename = "minPrice", default)]
    pub min_price: f64,
    #[serde(rename = "maxPrice", default = "default_max_price")]
    pub max_price: f64,
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub size: u32,
    #[serde(default = "default_sort")]
    pub sort: String,
}

fn default_max_price() -> f64 {
    DEFAULT_MAX_PRICE
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_sort() -> String {
    "name".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub stock_quantity: i64,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
            stock_quantity: product.stock_quantity,
            image_url: product.image_url,
            is_available: product.is_available,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedProductResponse {
    pub items: Vec<ProductResponse>,
    pub total_items: u64,
    pub total_pages: u32,
}

impl From<ProductPage> for PagedProductResponse {
    fn from(page: ProductPage) -> Self {
        Self {
            items: page.items.into_iter().map(ProductResponse::from).collect(),
            total_items: page.total_items,
            total_pages: page.total_pages,
        }
    }
}

#[tracing::instrument(name = "List products", skip(store))]
pub async fn list_products<S>(
    State(store): State<S>,
    Query(params): Query<ProductListParams>,
) -> Result<impl IntoResponse, CatalogApiError>
where
    S: ProductStore + Clone + 'static,
{
    let query = CatalogQuery::new(
        params.category,
        params.min_price,
        params.max_price,
        params.page,
        params.size,
        &params.sort,
    )?;

    let page = store.list(&query).await?;
    Ok(Json(PagedProductResponse::from(page)))
}

#[tracing::instrument(name = "Get product", skip(store))]
pub async fn get_product<S>(
    State(store): State<S>,
    Path(product_id): Path<String>,
) -> Result<impl IntoResponse, CatalogApiError>
where
    S: ProductStore + Clone + 'static,
{
    let product = store.find_by_id(&product_id).await?;
    Ok(Json(ProductResponse::from(product)))
}

#[tracing::instrument(name = "List categories", skip(store))]
pub async fn get_categories<S>(
    State(store): State<S>,
) -> Result<impl IntoResponse, CatalogApiError>
where
    S: ProductStore + Clone + 'static,
{
    let categories = store.categories().await?;
    Ok(Json(serde_json::json!({ "categories": categories })))
}

/// Maps [`CatalogError`] to a status code at the transport boundary.
#[derive(Debug)]
pub struct CatalogApiError(CatalogError);

impl From<CatalogError> for CatalogApiError {
    fn from(err: CatalogError) -> Self {
        Self(err)
    }
}

impl IntoResponse for CatalogApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            CatalogError::ProductNotFound => StatusCode::NOT_FOUND,
            CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
            CatalogError::Unexpected(_) => {
                tracing::error!(error = %self.0, "catalog request failed unexpectedly");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            "internal server error".to_string()
        } else {
            self.0.to_string()
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
