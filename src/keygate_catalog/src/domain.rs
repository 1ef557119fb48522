use chrono::{DateTime, Utc};

/// One catalog entry as stored. The catalog never mutates products; writes
/// arrive through an out-of-band ingestion path.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: String,
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

/// One page of a catalog listing.
#[derive(Debug, Clone)]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub total_items: u64,
    pub total_pages: u32,
}
