//! ShopCo Storefront library.
//!
//! The storefront core, independent of any rendering layer:
//!
//! - [`catalog`] - Read-only product catalog, loaded from JSON
//! - [`filter`] - Search and category filtering over the catalog
//! - [`cart`] - Cart lines, quantity management and derived totals
//! - [`session`] - Splash → registration → storefront gating flow
//! - [`splash`] - Cancellable splash screen timer
//! - [`views`] - Display models for product cards and the cart panel
//!
//! A [`state::StorefrontState`] holds the configuration and the shared
//! catalog, and hands out one [`session::Session`] per visitor. Each session
//! exclusively owns its cart.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod registration;
pub mod session;
pub mod splash;
pub mod state;
pub mod views;

pub use cart::{Cart, CartAction, CartChange, CartLine, RejectReason};
pub use catalog::{Catalog, CatalogError};
pub use config::{ConfigError, SplashConfig, StorefrontConfig};
pub use error::{Result, StorefrontError};
pub use filter::{ProductFilter, filter_products};
pub use models::{Customer, Product};
pub use registration::{Field, RegistrationErrors, RegistrationForm, validate_field};
pub use session::{Session, SessionError, Stage};
pub use splash::{SplashOutcome, SplashTimer};
pub use state::StorefrontState;
pub use views::{CartBadge, CartItemView, CartView, ProductCardView, results_label};
