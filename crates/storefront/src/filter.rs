//! Product search and category filtering.
//!
//! A product matches when both hold:
//!
//! - the query is empty, or it appears (case-insensitively) in the product's
//!   name or description
//! - the category is empty, or it equals the product's category name exactly
//!
//! Filtering is pure and order-preserving, and cheap enough to run on every
//! keystroke for catalogs of this size.

use shopco_core::Category;

use crate::models::Product;

/// Filter `products` by a free-text query and a category name.
///
/// An empty `query` and an empty `category` both match everything.
///
/// # Example
///
/// ```
/// use shopco_storefront::{Catalog, filter_products};
///
/// let catalog = Catalog::sample().unwrap();
/// let shoes = filter_products(catalog.products(), "", "Shoes");
/// assert!(shoes.iter().all(|p| p.category.as_str() == "Shoes"));
/// ```
#[must_use]
pub fn filter_products<'a, I>(products: I, query: &str, category: &str) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    ProductFilter::new(query, category).apply(products)
}

/// Search criteria built from the current search box and category selector.
///
/// The lowercased query is computed once when the filter is built, not per
/// product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    query: String,
    needle: String,
    category: Option<String>,
}

impl ProductFilter {
    /// Create a filter. An empty `category` means "All Products".
    #[must_use]
    pub fn new(query: &str, category: &str) -> Self {
        Self::default().with_query(query).with_category(category)
    }

    /// Replace the search query.
    #[must_use]
    pub fn with_query(mut self, query: &str) -> Self {
        query.clone_into(&mut self.query);
        self.needle = query.to_lowercase();
        self
    }

    /// Replace the category selection.
    #[must_use]
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = (!category.is_empty()).then(|| category.to_owned());
        self
    }

    /// Select a category by value.
    #[must_use]
    pub fn with_category_value(self, category: Option<Category>) -> Self {
        self.with_category(category.map_or("", Category::as_str))
    }

    /// The query as typed.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The selected category name, if any.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Returns true if the filter passes every product.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty() && self.category.is_none()
    }

    /// Test a single product.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_query(product) && self.matches_category(product)
    }

    /// Products passing the filter, in input order.
    #[must_use]
    pub fn apply<'a, I>(&self, products: I) -> Vec<&'a Product>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        products.into_iter().filter(|p| self.matches(p)).collect()
    }

    fn matches_query(&self, product: &Product) -> bool {
        self.needle.is_empty()
            || product.name.to_lowercase().contains(&self.needle)
            || product.description.to_lowercase().contains(&self.needle)
    }

    fn matches_category(&self, product: &Product) -> bool {
        self.category
            .as_deref()
            .is_none_or(|category| product.category.as_str() == category)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shopco_core::{CurrencyCode, Price, ProductId, Rating};

    use super::*;

    fn product(id: i32, name: &str, description: &str, category: Category) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: description.to_string(),
            category,
            price: Price::from_cents(1000, CurrencyCode::USD),
            rating: Rating::new(4.0).unwrap(),
            image: String::new(),
            in_stock: true,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Red Shoe", "Comfortable running shoe", Category::Shoes),
            product(2, "Blue Hat", "Keeps the sun off", Category::Hats),
            product(3, "Sun Lamp", "Bright light for dark winters", Category::HomeAndKitchen),
            product(4, "Trail Runner", "Grippy SHOE for trails", Category::Shoes),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<i32> {
        products.iter().map(|p| p.id.as_i32()).collect()
    }

    #[test]
    fn test_empty_criteria_match_everything() {
        let products = catalog();
        assert_eq!(ids(&filter_products(&products, "", "")), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_query_is_case_insensitive_across_name_and_description() {
        let products = catalog();
        assert_eq!(ids(&filter_products(&products, "shoe", "")), vec![1, 4]);
        assert_eq!(ids(&filter_products(&products, "SUN", "")), vec![2, 3]);
    }

    #[test]
    fn test_category_is_exact() {
        let products = catalog();
        assert_eq!(ids(&filter_products(&products, "", "Shoes")), vec![1, 4]);
        assert!(filter_products(&products, "", "shoes").is_empty());
        assert!(filter_products(&products, "", "Toys").is_empty());
    }

    #[test]
    fn test_query_and_category_combine() {
        let products = catalog();
        assert_eq!(ids(&filter_products(&products, "sun", "Hats")), vec![2]);
        assert!(filter_products(&products, "lamp", "Shoes").is_empty());
    }

    #[test]
    fn test_whitespace_query_is_not_trimmed() {
        let products = catalog();
        assert_eq!(ids(&filter_products(&products, "d s", "")), vec![1]);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(filter_products(&[], "anything", "Shoes").is_empty());
    }

    #[test]
    fn test_refiltering_with_empty_criteria_is_noop() {
        let products = catalog();
        let criteria = [
            ("shoe", ""),
            ("", "Hats"),
            ("sun", "Home & Kitchen"),
            ("x", ""),
        ];
        for (query, category) in criteria {
            let once = filter_products(&products, query, category);
            let twice = filter_products(once.iter().copied(), "", "");
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_filter_accessors() {
        let filter = ProductFilter::new("Shoe", "");
        assert_eq!(filter.query(), "Shoe");
        assert_eq!(filter.category(), None);
        assert!(!filter.is_empty());

        let filter = filter.with_query("").with_category_value(Some(Category::Hats));
        assert_eq!(filter.category(), Some("Hats"));
        assert!(!filter.is_empty());

        assert!(ProductFilter::default().is_empty());
    }
}
