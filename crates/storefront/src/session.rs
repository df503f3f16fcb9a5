//! Visitor session and the gating flow.
//!
//! A session moves through three stages, in order:
//!
//! ```text
//! Splash ──finish_splash()──▶ Registration ──register(form)──▶ Storefront
//! ```
//!
//! The session owns the visitor's cart. The cart can only be read or changed
//! once the visitor has reached the storefront.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument};

use shopco_core::ProductId;

use crate::cart::{Cart, CartAction, CartChange};
use crate::catalog::Catalog;
use crate::filter::ProductFilter;
use crate::models::{Customer, Product};
use crate::registration::{RegistrationErrors, RegistrationForm};

/// Stage of the gating flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Brand splash screen, shown for a fixed delay.
    Splash,
    /// Registration form.
    Registration,
    /// The store itself.
    Storefront,
}

impl Stage {
    /// The stage that follows this one.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Splash => Some(Self::Registration),
            Self::Registration => Some(Self::Storefront),
            Self::Storefront => None,
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Splash => "splash",
            Self::Registration => "registration",
            Self::Storefront => "storefront",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The storefront has not been unlocked yet.
    #[error("storefront is locked during the {stage} stage")]
    Locked { stage: Stage },

    /// The operation belongs to a different stage.
    #[error("expected the {expected} stage, session is at {actual}")]
    WrongStage { expected: Stage, actual: Stage },

    /// The visitor has already registered.
    #[error("already registered")]
    AlreadyRegistered,

    /// No catalog product has this ID.
    #[error("unknown product {0}")]
    UnknownProduct(ProductId),

    /// The registration form was invalid.
    #[error("registration failed: {0}")]
    Registration(#[from] RegistrationErrors),
}

/// A single visitor's session.
#[derive(Debug)]
pub struct Session {
    catalog: Arc<Catalog>,
    stage: Stage,
    customer: Option<Customer>,
    filter: ProductFilter,
    cart: Cart,
}

impl Session {
    /// Start a session at the splash stage with an empty cart.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let cart = Cart::new(catalog.currency());
        Self {
            catalog,
            stage: Stage::Splash,
            customer: None,
            filter: ProductFilter::default(),
            cart,
        }
    }

    /// Current stage.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// The registered customer, once past the registration stage.
    #[must_use]
    pub const fn customer(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    /// The catalog this session browses.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // =========================================================================
    // Gating flow
    // =========================================================================

    /// Leave the splash screen.
    ///
    /// Does nothing once the session is past the splash stage, so a late
    /// timer callback cannot move the session backwards.
    #[instrument(skip(self), fields(stage = %self.stage))]
    pub fn finish_splash(&mut self) -> Stage {
        if self.stage == Stage::Splash {
            self.stage = Stage::Registration;
            info!("Splash finished");
        }
        self.stage
    }

    /// Submit the registration form.
    ///
    /// On success the customer is stored and the storefront unlocks. On
    /// failure the session stays on the registration stage.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is not at the registration stage or
    /// any field is invalid.
    #[instrument(skip(self, form), fields(stage = %self.stage))]
    pub fn register(&mut self, form: &RegistrationForm) -> Result<&Customer, SessionError> {
        match self.stage {
            Stage::Registration => {}
            Stage::Storefront => return Err(SessionError::AlreadyRegistered),
            Stage::Splash => {
                return Err(SessionError::WrongStage {
                    expected: Stage::Registration,
                    actual: self.stage,
                });
            }
        }

        let customer = form.validate().inspect_err(|errors| {
            info!(%errors, "Registration rejected");
        })?;

        self.stage = Stage::Storefront;
        info!("Registration complete, storefront unlocked");
        Ok(self.customer.insert(customer))
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Set the search box text.
    pub fn set_query(&mut self, query: &str) {
        self.filter = std::mem::take(&mut self.filter).with_query(query);
    }

    /// Set the category selector. An empty string selects all products.
    pub fn set_category(&mut self, category: &str) {
        self.filter = std::mem::take(&mut self.filter).with_category(category);
    }

    /// Current search criteria.
    #[must_use]
    pub const fn filter(&self) -> &ProductFilter {
        &self.filter
    }

    /// Catalog products matching the current search criteria.
    #[must_use]
    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog.search(&self.filter)
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// The visitor's cart.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Locked` before registration completes.
    pub fn cart(&self) -> Result<&Cart, SessionError> {
        match self.stage {
            Stage::Storefront => Ok(&self.cart),
            stage => Err(SessionError::Locked { stage }),
        }
    }

    /// Mutable access to the visitor's cart.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Locked` before registration completes.
    pub fn cart_mut(&mut self) -> Result<&mut Cart, SessionError> {
        match self.stage {
            Stage::Storefront => Ok(&mut self.cart),
            stage => Err(SessionError::Locked { stage }),
        }
    }

    /// Add one unit of a catalog product to the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the storefront is locked or no product has this ID.
    #[instrument(skip(self))]
    pub fn add_to_cart(&mut self, product_id: ProductId) -> Result<CartChange, SessionError> {
        if self.stage != Stage::Storefront {
            return Err(SessionError::Locked { stage: self.stage });
        }
        let product = self
            .catalog
            .get(product_id)
            .ok_or(SessionError::UnknownProduct(product_id))?;
        Ok(self.cart.add(product))
    }

    /// Apply a cart action.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Locked` before registration completes.
    #[instrument(skip(self, action))]
    pub fn dispatch(&mut self, action: &CartAction) -> Result<CartChange, SessionError> {
        Ok(self.cart_mut()?.apply(action))
    }
}
