//! Read-only product catalog.
//!
//! The catalog is loaded once at startup, either from the sample data
//! embedded in the binary or from a JSON file named in the configuration.
//! Every load path runs the same validation, so a [`Catalog`] value always
//! upholds:
//!
//! - product IDs are unique
//! - prices are non-negative
//! - every product is priced in the same currency

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::instrument;

use shopco_core::{CurrencyCode, ProductId};

use crate::config::StorefrontConfig;
use crate::filter::ProductFilter;
use crate::models::Product;

/// Sample catalog shipped with the storefront.
const SAMPLE_CATALOG: &str = include_str!("../data/catalog.json");

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),

    #[error("product {0} has a negative price")]
    NegativePrice(ProductId),

    #[error("product {id} is priced in {found}, expected {expected}")]
    MixedCurrency {
        id: ProductId,
        expected: CurrencyCode,
        found: CurrencyCode,
    },
}

/// The static set of purchasable products.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    currency: CurrencyCode,
}

impl Catalog {
    /// Build a catalog from a list of products, preserving their order.
    ///
    /// An empty catalog is priced in the default currency.
    ///
    /// # Errors
    ///
    /// Returns an error if IDs repeat, a price is negative, or the products
    /// use more than one currency.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let currency = products
            .first()
            .map_or_else(CurrencyCode::default, |p| p.price.currency_code);

        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if product.price.is_negative() {
                return Err(CatalogError::NegativePrice(product.id));
            }
            if product.price.currency_code != currency {
                return Err(CatalogError::MixedCurrency {
                    id: product.id,
                    expected: currency,
                    found: product.price.currency_code,
                });
            }
        }

        Ok(Self { products, currency })
    }

    /// Parse a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails validation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails to parse.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(products = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// The sample catalog embedded in the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded data fails validation.
    pub fn sample() -> Result<Self, CatalogError> {
        Self::from_json(SAMPLE_CATALOG)
    }

    /// Load the catalog named by the configuration, or the sample catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured file cannot be loaded.
    pub fn from_config(config: &StorefrontConfig) -> Result<Self, CatalogError> {
        match &config.catalog_path {
            Some(path) => Self::load(path),
            None => Self::sample(),
        }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Currency every product is priced in.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns true if the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products passing the filter, in catalog order.
    #[must_use]
    pub fn search(&self, filter: &ProductFilter) -> Vec<&Product> {
        filter.apply(&self.products)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use shopco_core::{Category, Price, Rating};

    use super::*;

    fn product(id: i32, price: Price) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            description: String::new(),
            category: Category::Books,
            price,
            rating: Rating::new(4.0).unwrap(),
            image: String::new(),
            in_stock: true,
        }
    }

    #[test]
    fn test_sample_catalog_is_valid() {
        let catalog = Catalog::sample().unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.currency(), CurrencyCode::USD);
        assert!(catalog.products().iter().any(|p| !p.in_stock));
    }

    #[test]
    fn test_get() {
        let catalog = Catalog::sample().unwrap();
        let first = catalog.products().first().unwrap().clone();
        assert_eq!(catalog.get(first.id), Some(&first));
        assert!(catalog.get(ProductId::new(-1)).is_none());
    }

    #[test]
    fn test_duplicate_id() {
        let usd = Price::from_cents(100, CurrencyCode::USD);
        let result = Catalog::new(vec![product(1, usd), product(1, usd)]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == ProductId::new(1)));
    }

    #[test]
    fn test_negative_price() {
        let result = Catalog::new(vec![product(
            1,
            Price::new(Decimal::new(-5, 0), CurrencyCode::USD),
        )]);
        assert!(matches!(result, Err(CatalogError::NegativePrice(_))));
    }

    #[test]
    fn test_mixed_currency() {
        let result = Catalog::new(vec![
            product(1, Price::from_cents(100, CurrencyCode::USD)),
            product(2, Price::from_cents(100, CurrencyCode::EUR)),
        ]);
        assert!(matches!(
            result,
            Err(CatalogError::MixedCurrency {
                expected: CurrencyCode::USD,
                found: CurrencyCode::EUR,
                ..
            })
        ));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.currency(), CurrencyCode::USD);
        assert!(catalog.search(&ProductFilter::default()).is_empty());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Json(_))
        ));
        // Rating out of range is rejected while parsing
        let json = r#"[{"id":1,"name":"x","description":"","category":"Books",
            "price":{"amount":"1.00"},"rating":9,"image":"","in_stock":true}]"#;
        assert!(matches!(Catalog::from_json(json), Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::load(Path::new("/nonexistent/catalog.json"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
