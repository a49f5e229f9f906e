//! Backend connection settings

use crate::{CatalogError, Result};

/// Environment variable holding the backend base URL
pub const URL_VAR: &str = "CATALOG_BACKEND_URL";

/// Environment variable holding the public (anon) API key
pub const ANON_KEY_VAR: &str = "CATALOG_BACKEND_ANON_KEY";

/// Where the backend lives and how to authenticate against it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
}

impl BackendConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Result<Self> {
        let url = url.into();
        let anon_key = anon_key.into();

        if url.trim().is_empty() {
            return Err(CatalogError::MissingConfig(URL_VAR.to_string()));
        }
        if anon_key.trim().is_empty() {
            return Err(CatalogError::MissingConfig(ANON_KEY_VAR.to_string()));
        }

        Ok(BackendConfig {
            url: url.trim_end_matches('/').to_string(),
            anon_key,
        })
    }

    /// Read the settings from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the settings through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(URL_VAR).unwrap_or_default();
        let anon_key = lookup(ANON_KEY_VAR).unwrap_or_default();
        Self::new(url, anon_key)
    }
}
