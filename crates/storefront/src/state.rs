//! Storefront state shared across sessions.

use std::sync::Arc;

use tracing::info;

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::session::Session;
use crate::splash::SplashTimer;

/// Storefront state shared by every visitor session.
///
/// Cheaply cloneable via `Arc`. Holds the loaded configuration and the
/// read-only catalog that sessions browse.
#[derive(Debug, Clone)]
pub struct StorefrontState {
    inner: Arc<StorefrontStateInner>,
}

#[derive(Debug)]
struct StorefrontStateInner {
    config: StorefrontConfig,
    catalog: Arc<Catalog>,
}

impl StorefrontState {
    /// Create state from an already loaded catalog.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(StorefrontStateInner {
                config,
                catalog: Arc::new(catalog),
            }),
        }
    }

    /// Load the catalog named by the configuration and build the state.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read or fails validation.
    pub fn from_config(config: StorefrontConfig) -> Result<Self> {
        let catalog = Catalog::from_config(&config)?;
        info!(
            brand = %config.brand_name,
            products = catalog.len(),
            currency = %catalog.currency(),
            "Storefront ready"
        );
        Ok(Self::new(config, catalog))
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Start a new visitor session at the splash stage.
    #[must_use]
    pub fn new_session(&self) -> Session {
        Session::new(Arc::clone(&self.inner.catalog))
    }

    /// Start the splash timer with the configured timing.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn start_splash<F>(&self, on_complete: F) -> SplashTimer
    where
        F: FnOnce() + Send + 'static,
    {
        SplashTimer::from_config(&self.inner.config.splash, on_complete)
    }
}
