//! Static product catalog
//!
//! The catalog is a compiled-in table, read-only at runtime. No network
//! fetch, no file parsing; both the listing and detail views consume it.

mod data;
mod query;

pub use query::{CatalogQuery, SortOrder};

use shared::models::{Product, ProductType};
use shared::{AppError, AppResult};
use std::sync::LazyLock;

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    products: data::builtin_products(),
});

/// Read-only product table
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// The shop's built-in catalog
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// All products in catalog order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id
    pub fn get(&self, id: u32) -> AppResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::not_found(format!("product {id}")))
    }

    /// Unique category tags in first-seen order (feeds the filter sidebar)
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for product in &self.products {
            for tag in &product.category {
                if !seen.contains(&tag.as_str()) {
                    seen.push(tag.as_str());
                }
            }
        }
        seen
    }

    /// Unique product types in first-seen order
    pub fn types(&self) -> Vec<ProductType> {
        let mut seen = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.product_type) {
                seen.push(product.product_type);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_invariants() {
        let catalog = Catalog::builtin();
        let mut ids = HashSet::new();
        for product in catalog.products() {
            assert!(ids.insert(product.id), "duplicate product id {}", product.id);
            assert!(product.price >= 0.0, "negative price on {}", product.name);
            if let Some(variants) = &product.variants {
                assert!(!variants.is_empty(), "empty variants on {}", product.name);
            }
            if let Some(options) = &product.text_options {
                assert!(!options.is_empty(), "empty text options on {}", product.name);
            }
        }
    }

    #[test]
    fn test_get_known_product() {
        let catalog = Catalog::builtin();
        let product = catalog.get(1).unwrap();
        assert_eq!(product.name, "Metal Wreath");
        assert_eq!(product.price, 30.0);
    }

    #[test]
    fn test_get_missing_product() {
        let catalog = Catalog::builtin();
        let err = catalog.get(999).unwrap_err();
        assert_eq!(err.code, shared::ErrorCode::NotFound);
    }

    #[test]
    fn test_categories_first_seen_order() {
        let categories = Catalog::builtin().categories();
        assert_eq!(&categories[..2], &["Ramadan", "Eid"]);
        assert!(categories.contains(&"Islamic"));
        assert!(categories.contains(&"Gifts"));
        // No duplicates
        let unique: HashSet<_> = categories.iter().collect();
        assert_eq!(unique.len(), categories.len());
    }

    #[test]
    fn test_types_cover_catalog() {
        let types = Catalog::builtin().types();
        assert_eq!(types.len(), ProductType::ALL.len());
        assert_eq!(types[0], ProductType::Decor);
    }
}
