//! Display data for the storefront screens.
//!
//! These are plain structs with everything pre-formatted, ready to hand to
//! whatever renders the page. They hold no references into the cart or
//! catalog and are rebuilt after every change.

use serde::Serialize;

use shopco_core::Rating;

use crate::cart::{Cart, CartLine};
use crate::models::Product;

/// Badge text for products that cannot be added to the cart.
pub const OUT_OF_STOCK_BADGE: &str = "Out of Stock";

/// Product card display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCardView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub category: String,
    pub category_icon: String,
    pub price: String,
    pub image: String,
    /// Filled stars out of [`ProductCardView::MAX_STARS`].
    pub full_stars: u8,
    pub rating: String,
    pub can_add_to_cart: bool,
    pub badge: Option<&'static str>,
}

impl ProductCardView {
    /// Number of stars drawn per card.
    pub const MAX_STARS: u8 = 5;

    /// Whether the star at `index` (zero-based) is filled.
    #[must_use]
    pub const fn star_filled(&self, index: u8) -> bool {
        index < self.full_stars
    }
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            description: product.description.clone(),
            category: product.category.as_str().to_string(),
            category_icon: product.category.icon().to_string(),
            price: product.price.display(),
            image: product.image.clone(),
            full_stars: product.rating.full_stars().min(ProductCardView::MAX_STARS),
            rating: format_rating(product.rating),
            can_add_to_cart: product.in_stock,
            badge: (!product.in_stock).then_some(OUT_OF_STOCK_BADGE),
        }
    }
}

fn format_rating(rating: Rating) -> String {
    format!("({rating})")
}

/// Cart item display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemView {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        let product = line.product();
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            image: product.image.clone(),
            quantity: line.quantity(),
            price: product.price.display(),
            line_price: line.line_total().display(),
        }
    }
}

/// Cart panel display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: usize,
    pub total_quantity: u64,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self::from(&Cart::default())
    }

    /// Returns true if there is nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().iter().map(CartItemView::from).collect(),
            subtotal: cart.total_price().display(),
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
        }
    }
}

/// Header cart badge. Hidden while the cart is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartBadge {
    pub count: usize,
}

impl CartBadge {
    /// Badge for the cart, or `None` when it should be hidden.
    #[must_use]
    pub fn for_cart(cart: &Cart) -> Option<Self> {
        let count = cart.item_count();
        (count > 0).then_some(Self { count })
    }
}

/// Summary line above the product grid.
#[must_use]
pub fn results_label(count: usize) -> String {
    if count == 1 {
        "1 product found".to_string()
    } else {
        format!("{count} products found")
    }
}
