//! Catalog filtering and sorting
//!
//! A product is kept when it matches at least one selected category (or no
//! category filter is set) and its type is selected (or no type filter is
//! set). Sorting by price is stable, so ties keep catalog order.

use shared::AppError;
use shared::models::{Product, ProductType};

/// Price sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl std::str::FromStr for SortOrder {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            other => Err(AppError::invalid_request(format!(
                "unknown sort order: {other}"
            ))),
        }
    }
}

/// Filter and sort parameters for a catalog listing
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    /// Selected category tags (empty = no category filter)
    pub categories: Vec<String>,
    /// Selected product types (empty = no type filter)
    pub types: Vec<ProductType>,
    /// Optional price sort; unset preserves catalog order
    pub sort: Option<SortOrder>,
}

impl CatalogQuery {
    /// Produce the filtered, optionally sorted subsequence
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut result: Vec<&Product> =
            products.iter().filter(|p| self.matches(p)).collect();

        match self.sort {
            Some(SortOrder::Ascending) => result.sort_by(|a, b| a.price.total_cmp(&b.price)),
            Some(SortOrder::Descending) => result.sort_by(|a, b| b.price.total_cmp(&a.price)),
            None => {}
        }

        result
    }

    fn matches(&self, product: &Product) -> bool {
        let category_ok = self.categories.is_empty()
            || product.category.iter().any(|c| self.categories.contains(c));
        let type_ok = self.types.is_empty() || self.types.contains(&product.product_type);
        category_ok && type_ok
    }
}
