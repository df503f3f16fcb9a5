//! Integration tests for the ShopCo storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopco-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - Cart behaviour against the sample catalog
//! - `session_flow` - Splash, registration and storefront gating
//!
//! The helpers below build catalogs and registered sessions so each test
//! file starts from the same fixtures.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use rust_decimal::Decimal;
use shopco_core::{Category, CurrencyCode, Price, ProductId, Rating};
use shopco_storefront::{
    Catalog, Product, RegistrationForm, Session, StorefrontConfig, StorefrontState,
};

/// A registration form that passes validation.
#[must_use]
pub fn valid_form() -> RegistrationForm {
    RegistrationForm::new("Ada", "Lovelace", "+44 20 7946 0958")
}

/// Build an in-stock USD product priced in whole dollars.
///
/// # Panics
///
/// Panics if `rating` is outside 0 to 5.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn product(id: i32, name: &str, category: Category, dollars: i64, rating: f32) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: format!("{name} for everyday use"),
        category,
        price: Price::new(Decimal::from(dollars), CurrencyCode::USD),
        rating: Rating::new(rating).unwrap(),
        image: format!("/images/{id}.jpg"),
        in_stock: true,
    }
}

/// State backed by the embedded sample catalog and default config.
///
/// # Panics
///
/// Panics if the sample catalog fails to load.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn sample_state() -> StorefrontState {
    StorefrontState::from_config(StorefrontConfig::default()).unwrap()
}

/// A session over `catalog` that has already passed splash and registration.
///
/// # Panics
///
/// Panics if registration with [`valid_form`] fails.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn registered_session(catalog: Catalog) -> Session {
    let mut session = Session::new(Arc::new(catalog));
    session.finish_splash();
    session.register(&valid_form()).unwrap();
    session
}
