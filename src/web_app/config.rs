// web_app/config.rs - Catalog configuration
//
// The browser bundle cannot read the environment at runtime, so the catalog
// address is baked in at compile time from CATALOG_API_URL. The server binary
// reads the same variable at runtime (after loading .env) to check that the
// address it expects matches what was compiled in.

use reqwest::Url;
use thiserror::Error;

/// Catalog address used when CATALOG_API_URL is not set
pub const DEFAULT_CATALOG_URL: &str = "http://localhost:3000";

/// Environment variable holding the catalog base address
pub const CATALOG_URL_VAR: &str = "CATALOG_API_URL";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid catalog base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    base_url: String,
}

impl CatalogConfig {
    /// Validates and wraps a base address
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        let parsed = Url::parse(&base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url,
                reason: "url cannot be used as a base".to_string(),
            });
        }
        Ok(Self { base_url })
    }

    /// Address compiled into this build
    pub fn compiled() -> Self {
        let raw = option_env!("CATALOG_API_URL").unwrap_or(DEFAULT_CATALOG_URL);
        Self::new(raw).unwrap_or_else(|e| {
            tracing::warn!("{}, falling back to {}", e, DEFAULT_CATALOG_URL);
            Self { base_url: DEFAULT_CATALOG_URL.to_string() }
        })
    }

    /// Address from the process environment (server side only)
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(CATALOG_URL_VAR) {
            Ok(raw) => Self::new(raw),
            Err(_) => Self::new(DEFAULT_CATALOG_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::compiled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_base() {
        let config = CatalogConfig::new("http://catalog.local:3000").unwrap();
        assert_eq!(config.base_url(), "http://catalog.local:3000");
    }

    #[test]
    fn test_rejects_garbage() {
        let err = CatalogConfig::new("not a url").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn test_rejects_cannot_be_a_base() {
        assert!(CatalogConfig::new("mailto:someone@example.com").is_err());
    }

    #[test]
    fn test_compiled_is_valid() {
        let config = CatalogConfig::compiled();
        assert!(CatalogConfig::new(config.base_url()).is_ok());
    }
}
