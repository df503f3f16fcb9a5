//! Unified error handling.
//!
//! Each module defines its own error enum; `StorefrontError` wraps them so
//! callers that touch several modules can use a single `Result` type with `?`.
//! Cart operations never fail and have no error type.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::registration::RegistrationErrors;
use crate::session::SessionError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog could not be loaded or failed validation.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// A session operation was refused.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

impl From<RegistrationErrors> for StorefrontError {
    fn from(errors: RegistrationErrors) -> Self {
        Self::Session(SessionError::Registration(errors))
    }
}

impl StorefrontError {
    /// Returns true if the error came from visitor input rather than setup.
    ///
    /// Input errors should be shown to the visitor; the rest are fatal at
    /// startup.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::Session(_))
    }
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
