use crate::ports::CatalogError;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Upper price bound applied when the caller gives none; mirrors the open
/// upper end of "no maximum" without a second query shape.
pub const DEFAULT_MAX_PRICE: f64 = 999_999_999.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Price,
    CreatedAt,
}

impl SortKey {
    /// The column this key maps to. Sort input never reaches SQL as raw
    /// text; it passes through this closed enum first.
    pub fn column(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Price => "price",
            Self::CreatedAt => "created_at",
        }
    }
}

/// A parsed sort directive. `name` sorts ascending, `-name` descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub descending: bool,
}

impl SortSpec {
    pub fn parse(raw: &str) -> Result<Self, CatalogError> {
        let (descending, key) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };

        let key = match key {
            "name" => SortKey::Name,
            "price" => SortKey::Price,
            "created_at" | "createdAt" => SortKey::CreatedAt,
            other => {
                return Err(CatalogError::Validation(format!(
                    "unknown sort key: {other}"
                )));
            }
        };

        Ok(Self { key, descending })
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            key: SortKey::Name,
            descending: false,
        }
    }
}

/// A validated catalog listing request.
///
/// `page` is zero-based. `size` is guaranteed non-zero by construction, so
/// the page arithmetic below cannot divide by zero.
#[derive(Debug, Clone)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub min_price: f64,
    pub max_price: f64,
    page: u32,
    size: u32,
    pub sort: SortSpec,
}

impl CatalogQuery {
    pub fn new(
        category: Option<String>,
        min_price: f64,
        max_price: f64,
        page: u32,
        size: u32,
        sort: &str,
    ) -> Result<Self, CatalogError> {
        if size == 0 {
            return Err(CatalogError::Validation(
                "page size must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            category,
            min_price,
            max_price,
            page,
            size,
            sort: SortSpec::parse(sort)?,
        })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }

    pub fn total_pages(&self, total_items: u64) -> u32 {
        u32::try_from(total_items.div_ceil(u64::from(self.size))).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: u32, size: u32) -> CatalogQuery {
        CatalogQuery::new(None, 0.0, DEFAULT_MAX_PRICE, page, size, "name").unwrap()
    }

    #[test]
    fn offset_is_page_times_size() {
        assert_eq!(query(0, 10).offset(), 0);
        assert_eq!(query(3, 10).offset(), 30);
        assert_eq!(query(2, 7).offset(), 14);
    }

    #[test]
    fn limit_is_the_page_size() {
        assert_eq!(query(0, 25).limit(), 25);
    }

    #[test]
    fn total_pages_rounds_up_the_final_partial_page() {
        let q = query(0, 10);
        assert_eq!(q.total_pages(0), 0);
        assert_eq!(q.total_pages(1), 1);
        assert_eq!(q.total_pages(10), 1);
        assert_eq!(q.total_pages(11), 2);
        assert_eq!(q.total_pages(99), 10);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let result = CatalogQuery::new(None, 0.0, DEFAULT_MAX_PRICE, 0, 0, "name");
        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }

    #[test]
    fn sort_parses_direction_and_key() {
        assert_eq!(
            SortSpec::parse("name").unwrap(),
            SortSpec {
                key: SortKey::Name,
                descending: false
            }
        );
        assert_eq!(
            SortSpec::parse("-price").unwrap(),
            SortSpec {
                key: SortKey::Price,
                descending: true
            }
        );
        assert_eq!(SortSpec::parse("createdAt").unwrap().key, SortKey::CreatedAt);
        assert_eq!(SortSpec::parse("-created_at").unwrap().descending, true);
    }

    #[test]
    fn unknown_sort_keys_are_rejected() {
        assert!(matches!(
            SortSpec::parse("price; DROP TABLE products"),
            Err(CatalogError::Validation(_))
        ));
        assert!(matches!(SortSpec::parse(""), Err(CatalogError::Validation(_))));
    }
}
