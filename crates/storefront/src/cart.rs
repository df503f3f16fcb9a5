//! Shopping cart.
//!
//! The cart is an ordered list of lines, one per distinct product, in the
//! order products were first added. It is changed only through four
//! operations: [`Cart::add`], [`Cart::remove`], [`Cart::update_quantity`] and
//! [`Cart::clear`]. None of them can fail; invalid requests (an unknown ID,
//! an out-of-stock product) leave the cart untouched and report
//! [`CartChange::Unchanged`] or [`CartChange::Rejected`].
//!
//! Totals are recomputed from the lines on every read.

use std::num::NonZeroU32;

use tracing::{debug, warn};

use shopco_core::{CurrencyCode, Price, ProductId};

use crate::models::Product;

/// One product in the cart with its quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    product: Product,
    quantity: NonZeroU32,
}

impl CartLine {
    /// The product on this line.
    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    /// Shorthand for `self.product().id`.
    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Quantity, always at least one.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity())
    }
}

/// Why an add was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The product is marked out of stock.
    OutOfStock,
    /// The product is priced in a different currency from the cart.
    CurrencyMismatch {
        expected: CurrencyCode,
        found: CurrencyCode,
    },
}

/// What a cart operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    /// A new line was appended with quantity one.
    Added { product_id: ProductId },
    /// An existing line's quantity went up by one.
    Incremented { product_id: ProductId, quantity: u32 },
    /// A line's quantity was set to a new value.
    QuantitySet { product_id: ProductId, quantity: u32 },
    /// A line was deleted.
    Removed { product_id: ProductId },
    /// Every line was deleted.
    Cleared { lines: usize },
    /// The operation had nothing to do.
    Unchanged,
    /// The product could not be added.
    Rejected {
        product_id: ProductId,
        reason: RejectReason,
    },
}

impl CartChange {
    /// Returns true if the cart contents changed.
    #[must_use]
    pub const fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged | Self::Rejected { .. })
    }
}

/// A cart operation, for dispatching user actions in order.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add one unit of a product.
    Add(Product),
    /// Delete a product's line.
    Remove(ProductId),
    /// Set a product's quantity; zero or less removes the line.
    UpdateQuantity { product_id: ProductId, quantity: i64 },
    /// Empty the cart.
    Clear,
}

/// A shopping cart.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    currency: CurrencyCode,
    lines: Vec<CartLine>,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(CurrencyCode::default())
    }
}

impl Cart {
    /// Create an empty cart priced in `currency`.
    #[must_use]
    pub const fn new(currency: CurrencyCode) -> Self {
        Self {
            currency,
            lines: Vec::new(),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Add one unit of `product`.
    ///
    /// Out-of-stock products are refused here even if the caller already
    /// hides the button. A product already in the cart has its quantity
    /// incremented; otherwise a new line is appended.
    pub fn add(&mut self, product: &Product) -> CartChange {
        let product_id = product.id;

        if !product.in_stock {
            warn!(%product_id, "Refusing to add out-of-stock product");
            return CartChange::Rejected {
                product_id,
                reason: RejectReason::OutOfStock,
            };
        }

        if product.price.currency_code != self.currency {
            warn!(
                %product_id,
                expected = %self.currency,
                found = %product.price.currency_code,
                "Refusing to add product in another currency"
            );
            return CartChange::Rejected {
                product_id,
                reason: RejectReason::CurrencyMismatch {
                    expected: self.currency,
                    found: product.price.currency_code,
                },
            };
        }

        if let Some(line) = self.line_mut(product_id) {
            line.quantity = line.quantity.saturating_add(1);
            let quantity = line.quantity();
            debug!(%product_id, quantity, "Incremented cart line");
            return CartChange::Incremented {
                product_id,
                quantity,
            };
        }

        self.lines.push(CartLine {
            product: product.clone(),
            quantity: NonZeroU32::MIN,
        });
        debug!(%product_id, "Added cart line");
        CartChange::Added { product_id }
    }

    /// Delete the line for `product_id`, if there is one.
    pub fn remove(&mut self, product_id: ProductId) -> CartChange {
        let before = self.lines.len();
        self.lines.retain(|line| line.product_id() != product_id);

        if self.lines.len() == before {
            return CartChange::Unchanged;
        }
        debug!(%product_id, "Removed cart line");
        CartChange::Removed { product_id }
    }

    /// Set the quantity for `product_id` to exactly `quantity`.
    ///
    /// A quantity of zero or less removes the line. Quantities above
    /// `u32::MAX` are clamped. Products not in the cart are ignored.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) -> CartChange {
        let Some(quantity) = u32::try_from(quantity.max(0))
            .map_or(NonZeroU32::new(u32::MAX), NonZeroU32::new)
        else {
            return self.remove(product_id);
        };

        let Some(line) = self.line_mut(product_id) else {
            return CartChange::Unchanged;
        };
        if line.quantity == quantity {
            return CartChange::Unchanged;
        }

        line.quantity = quantity;
        debug!(%product_id, quantity = quantity.get(), "Set cart line quantity");
        CartChange::QuantitySet {
            product_id,
            quantity: quantity.get(),
        }
    }

    /// Delete every line.
    pub fn clear(&mut self) -> CartChange {
        if self.lines.is_empty() {
            return CartChange::Unchanged;
        }
        let lines = self.lines.len();
        self.lines.clear();
        debug!(lines, "Cleared cart");
        CartChange::Cleared { lines }
    }

    /// Apply a [`CartAction`].
    pub fn apply(&mut self, action: &CartAction) -> CartChange {
        match action {
            CartAction::Add(product) => self.add(product),
            CartAction::Remove(product_id) => self.remove(*product_id),
            CartAction::UpdateQuantity {
                product_id,
                quantity,
            } => self.update_quantity(*product_id, *quantity),
            CartAction::Clear => self.clear(),
        }
    }

    // =========================================================================
    // Derived values
    // =========================================================================

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity())).sum()
    }

    /// Sum of quantity times unit price over all lines.
    ///
    /// Saturates at the largest representable amount.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.lines
            .iter()
            .fold(Price::zero(self.currency), |total, line| {
                total.saturating_add(&line.line_total())
            })
    }

    /// Returns true if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines in the order products were first added.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for `product_id`, if present.
    #[must_use]
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id() == product_id)
    }

    /// Quantity of `product_id` in the cart, zero if absent.
    #[must_use]
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.line(product_id).map_or(0, CartLine::quantity)
    }

    /// Currency the cart totals are expressed in.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product_id() == product_id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use shopco_core::{Category, Rating};

    use super::*;

    fn product(id: i32, name: &str, dollars: i64, in_stock: bool) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: String::new(),
            category: Category::Shoes,
            price: Price::new(Decimal::from(dollars), CurrencyCode::USD),
            rating: Rating::new(4.0).unwrap(),
            image: String::new(),
            in_stock,
        }
    }

    fn red_shoe() -> Product {
        product(1, "Red Shoe", 20, true)
    }

    fn blue_hat() -> Product {
        product(2, "Blue Hat", 10, false)
    }

    fn dollars(n: i64) -> Price {
        Price::new(Decimal::from(n), CurrencyCode::USD)
    }

    /// Totals must always agree with a fresh computation over the lines.
    fn assert_consistent(cart: &Cart) {
        let quantity: u64 = cart.lines().iter().map(|l| u64::from(l.quantity())).sum();
        let amount: Decimal = cart
            .lines()
            .iter()
            .map(|l| l.product().price.amount * Decimal::from(l.quantity()))
            .sum();
        assert_eq!(cart.item_count(), cart.lines().len());
        assert_eq!(cart.total_quantity(), quantity);
        assert_eq!(cart.total_price().amount, amount);
        assert!(cart.lines().iter().all(|l| l.quantity() >= 1));
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::default();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total_quantity(), 0);
        assert_eq!(cart.total_price(), dollars(0));
    }

    #[test]
    fn test_add_out_of_stock_is_rejected() {
        let mut cart = Cart::default();
        let change = cart.add(&blue_hat());
        assert_eq!(
            change,
            CartChange::Rejected {
                product_id: ProductId::new(2),
                reason: RejectReason::OutOfStock,
            }
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_twice_increments() {
        let mut cart = Cart::default();
        assert_eq!(
            cart.add(&red_shoe()),
            CartChange::Added {
                product_id: ProductId::new(1)
            }
        );
        assert_eq!(
            cart.add(&red_shoe()),
            CartChange::Incremented {
                product_id: ProductId::new(1),
                quantity: 2
            }
        );
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.quantity_of(ProductId::new(1)), 2);
        assert_eq!(cart.total_price(), dollars(40));
        assert_consistent(&cart);
    }

    #[test]
    fn test_add_preserves_first_added_order() {
        let mut cart = Cart::default();
        let a = product(5, "A", 1, true);
        let b = product(3, "B", 2, true);
        cart.add(&a);
        cart.add(&b);
        cart.add(&a);
        let ids: Vec<i32> = cart.lines().iter().map(|l| l.product_id().as_i32()).collect();
        assert_eq!(ids, vec![5, 3]);
    }

    #[test]
    fn test_add_other_currency_is_rejected() {
        let mut cart = Cart::new(CurrencyCode::EUR);
        let change = cart.add(&red_shoe());
        assert!(matches!(
            change,
            CartChange::Rejected {
                reason: RejectReason::CurrencyMismatch {
                    expected: CurrencyCode::EUR,
                    found: CurrencyCode::USD
                },
                ..
            }
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_sets_exact_value() {
        let mut cart = Cart::default();
        cart.add(&red_shoe());
        cart.add(&red_shoe());
        assert_eq!(
            cart.update_quantity(ProductId::new(1), 5),
            CartChange::QuantitySet {
                product_id: ProductId::new(1),
                quantity: 5
            }
        );
        assert_eq!(cart.quantity_of(ProductId::new(1)), 5);
        assert_eq!(cart.total_price(), dollars(100));
        assert_eq!(
            cart.update_quantity(ProductId::new(1), 5),
            CartChange::Unchanged
        );
    }

    #[test]
    fn test_update_quantity_zero_removes_line() {
        let mut cart = Cart::default();
        cart.add(&red_shoe());
        cart.update_quantity(ProductId::new(1), 5);
        assert_eq!(
            cart.update_quantity(ProductId::new(1), 0),
            CartChange::Removed {
                product_id: ProductId::new(1)
            }
        );
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), dollars(0));
    }

    #[test]
    fn test_update_quantity_non_positive_matches_remove() {
        for n in [0, -1, -7, i64::MIN] {
            let mut updated = Cart::default();
            updated.add(&red_shoe());
            updated.add(&product(9, "Sock", 3, true));
            let mut removed = updated.clone();

            updated.update_quantity(ProductId::new(1), n);
            removed.remove(ProductId::new(1));
            assert_eq!(updated, removed);
        }
    }

    #[test]
    fn test_update_quantity_clamps_large_values() {
        let mut cart = Cart::default();
        cart.add(&red_shoe());
        cart.update_quantity(ProductId::new(1), i64::MAX);
        assert_eq!(cart.quantity_of(ProductId::new(1)), u32::MAX);
        assert_eq!(cart.total_quantity(), u64::from(u32::MAX));
    }

    #[test]
    fn test_add_saturates_at_max_quantity() {
        let mut cart = Cart::default();
        cart.add(&red_shoe());
        cart.update_quantity(ProductId::new(1), i64::from(u32::MAX));
        cart.add(&red_shoe());
        assert_eq!(cart.quantity_of(ProductId::new(1)), u32::MAX);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_absent_ids_are_noops() {
        let mut cart = Cart::default();
        cart.add(&red_shoe());
        let before = cart.clone();

        assert_eq!(cart.remove(ProductId::new(42)), CartChange::Unchanged);
        assert_eq!(
            cart.update_quantity(ProductId::new(42), 3),
            CartChange::Unchanged
        );
        assert_eq!(
            cart.update_quantity(ProductId::new(42), 0),
            CartChange::Unchanged
        );
        assert_eq!(cart, before);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::default();
        cart.add(&red_shoe());
        cart.add(&product(3, "Sock", 3, true));
        assert_eq!(cart.clear(), CartChange::Cleared { lines: 2 });
        assert!(cart.is_empty());
        assert_eq!(cart.clear(), CartChange::Unchanged);
    }

    #[test]
    fn test_apply_dispatches_in_order() {
        let mut cart = Cart::default();
        let sock = product(3, "Sock", 3, true);
        let actions = [
            CartAction::Add(red_shoe()),
            CartAction::Add(sock.clone()),
            CartAction::Add(blue_hat()),
            CartAction::UpdateQuantity {
                product_id: sock.id,
                quantity: 4,
            },
            CartAction::Add(red_shoe()),
            CartAction::Remove(ProductId::new(99)),
        ];
        let changes: Vec<bool> = actions
            .iter()
            .map(|action| {
                let change = cart.apply(action);
                assert_consistent(&cart);
                change.is_change()
            })
            .collect();

        assert_eq!(changes, vec![true, true, false, true, true, false]);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total_quantity(), 6);
        assert_eq!(cart.total_price(), dollars(52));

        assert!(cart.apply(&CartAction::Clear).is_change());
        assert_consistent(&cart);
    }

    #[test]
    fn test_line_total() {
        let mut cart = Cart::default();
        cart.add(&red_shoe());
        cart.update_quantity(ProductId::new(1), 3);
        let line = cart.line(ProductId::new(1)).unwrap();
        assert_eq!(line.line_total(), dollars(60));
        assert_eq!(line.product().name, "Red Shoe");
    }

    #[test]
    fn test_huge_totals_saturate() {
        let mut expensive = product(3, "Yacht", 0, true);
        expensive.price.amount = Decimal::from(50_000_000_000_000_000_000_i128);
        let mut cart = Cart::default();
        cart.add(&expensive);
        cart.add(&red_shoe());

        cart.update_quantity(ProductId::new(3), 10_000_000_000);
        assert_eq!(cart.quantity_of(ProductId::new(3)), u32::MAX);
        assert_eq!(cart.total_price().amount, Decimal::MAX);
        assert_eq!(cart.total_price().currency_code, CurrencyCode::USD);
        assert_eq!(cart.total_quantity(), u64::from(u32::MAX) + 1);
    }
}
