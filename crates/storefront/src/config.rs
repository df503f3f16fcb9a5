//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `SHOPCO_BRAND_NAME` - Name shown on the splash screen (default: `ShopCo`)
//! - `SHOPCO_SPLASH_DELAY_MS` - Splash display time in milliseconds (default: 800)
//! - `SHOPCO_SPLASH_FADE_MS` - Splash fade-out time in milliseconds (default: 100)
//! - `SHOPCO_CATALOG_PATH` - JSON catalog file (default: the embedded sample catalog)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_BRAND_NAME: &str = "ShopCo";
const DEFAULT_SPLASH_DELAY_MS: u64 = 800;
const DEFAULT_SPLASH_FADE_MS: u64 = 100;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Brand name shown on the splash screen
    pub brand_name: String,
    /// Splash screen timing
    pub splash: SplashConfig,
    /// Catalog file to load instead of the embedded sample
    pub catalog_path: Option<PathBuf>,
}

/// Splash screen timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashConfig {
    /// How long the splash is shown before fading out
    pub delay: Duration,
    /// Fade-out time before the registration screen appears
    pub fade: Duration,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_SPLASH_DELAY_MS),
            fade: Duration::from_millis(DEFAULT_SPLASH_FADE_MS),
        }
    }
}

impl SplashConfig {
    /// Total time from start until the splash completes.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.delay + self.fade
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            brand_name: DEFAULT_BRAND_NAME.to_string(),
            splash: SplashConfig::default(),
            catalog_path: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let brand_name = lookup("SHOPCO_BRAND_NAME")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BRAND_NAME.to_string());

        let splash = SplashConfig {
            delay: get_millis(&lookup, "SHOPCO_SPLASH_DELAY_MS", DEFAULT_SPLASH_DELAY_MS)?,
            fade: get_millis(&lookup, "SHOPCO_SPLASH_FADE_MS", DEFAULT_SPLASH_FADE_MS)?,
        };

        let catalog_path = lookup("SHOPCO_CATALOG_PATH")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            brand_name,
            splash,
            catalog_path,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Read a millisecond duration, falling back to `default` when unset.
fn get_millis(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: u64,
) -> Result<Duration, ConfigError> {
    let Some(value) = lookup(key) else {
        return Ok(Duration::from_millis(default));
    };
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.brand_name, "ShopCo");
        assert_eq!(config.splash.total(), Duration::from_millis(900));
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("SHOPCO_BRAND_NAME", "Corner Shop"),
            ("SHOPCO_SPLASH_DELAY_MS", "250"),
            ("SHOPCO_SPLASH_FADE_MS", " 0 "),
            ("SHOPCO_CATALOG_PATH", "/srv/catalog.json"),
        ]))
        .unwrap();

        assert_eq!(config.brand_name, "Corner Shop");
        assert_eq!(config.splash.delay, Duration::from_millis(250));
        assert_eq!(config.splash.fade, Duration::ZERO);
        assert_eq!(
            config.catalog_path.as_deref(),
            Some(std::path::Path::new("/srv/catalog.json"))
        );
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("SHOPCO_BRAND_NAME", "  "),
            ("SHOPCO_CATALOG_PATH", ""),
        ]))
        .unwrap();
        assert_eq!(config.brand_name, "ShopCo");
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_invalid_duration() {
        let result =
            StorefrontConfig::from_lookup(lookup(&[("SHOPCO_SPLASH_DELAY_MS", "soon")]));
        let ConfigError::InvalidEnvVar(key, _) = result.unwrap_err();
        assert_eq!(key, "SHOPCO_SPLASH_DELAY_MS");
    }
}
