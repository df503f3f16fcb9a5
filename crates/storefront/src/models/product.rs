//! Product domain type.

use serde::{Deserialize, Serialize};

use shopco_core::{Category, Price, ProductId, Rating};

/// A catalog product.
///
/// Products are immutable once loaded. The cart keeps its own copy of each
/// product it holds, so a line stays renderable on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID, never reused.
    pub id: ProductId,
    /// Product name (searched by the filter).
    pub name: String,
    /// Product description (searched by the filter).
    pub description: String,
    /// Category the product is listed under.
    pub category: Category,
    /// Unit price.
    pub price: Price,
    /// Average customer rating.
    pub rating: Rating,
    /// Image URL.
    pub image: String,
    /// Whether the product can be added to the cart.
    pub in_stock: bool,
}
