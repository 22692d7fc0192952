// ABOUTME: Environment configuration for the catalog client, response cache, and search
// ABOUTME: Reads BARKEEP_* and COCKTAILDB_* variables with typed defaults and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

//! Environment-based configuration
//!
//! There is no configuration file. Every setting has a default suited to the
//! free TheCocktailDB tier, and an unparseable value is an error rather than
//! a silent fallback.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;

use crate::constants::{cache, catalog, search};
use crate::errors::{AppError, AppResult};

/// Catalog base URL override
pub const ENV_CATALOG_URL: &str = "BARKEEP_CATALOG_URL";
/// TheCocktailDB API key (the public test key is `1`)
pub const ENV_API_KEY: &str = "COCKTAILDB_API_KEY";
/// Per-request timeout in seconds
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "BARKEEP_REQUEST_TIMEOUT_SECS";
/// Maximum number of cached catalog responses
pub const ENV_CACHE_MAX_ENTRIES: &str = "BARKEEP_CACHE_MAX_ENTRIES";
/// Lifetime of cached full recipes in seconds
pub const ENV_CACHE_TTL_RECIPE_SECS: &str = "BARKEEP_CACHE_TTL_RECIPE_SECS";
/// Lifetime of cached lists in seconds
pub const ENV_CACHE_TTL_LIST_SECS: &str = "BARKEEP_CACHE_TTL_LIST_SECS";
/// Search-as-you-type delay in milliseconds
pub const ENV_SEARCH_DEBOUNCE_MS: &str = "BARKEEP_SEARCH_DEBOUNCE_MS";
/// Number of random drinks shown before searching
pub const ENV_RANDOM_COUNT: &str = "BARKEEP_RANDOM_COUNT";
/// Number of "just for you" recommendations
pub const ENV_RECOMMENDATION_COUNT: &str = "BARKEEP_RECOMMENDATION_COUNT";

/// Catalog response cache settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCacheConfig {
    /// Maximum cached responses per cache
    pub max_entries: usize,
    /// Full recipe lifetime in seconds
    pub recipe_ttl_secs: u64,
    /// List (summaries, ingredients, categories, glasses) lifetime in seconds
    pub list_ttl_secs: u64,
}

impl Default for CatalogCacheConfig {
    fn default() -> Self {
        Self {
            max_entries: cache::DEFAULT_CACHE_MAX_ENTRIES,
            recipe_ttl_secs: cache::TTL_RECIPE_SECS,
            list_ttl_secs: cache::TTL_LIST_SECS,
        }
    }
}

impl CatalogCacheConfig {
    /// Full recipe lifetime
    #[must_use]
    pub const fn recipe_ttl(&self) -> Duration {
        Duration::from_secs(self.recipe_ttl_secs)
    }

    /// List lifetime
    #[must_use]
    pub const fn list_ttl(&self) -> Duration {
        Duration::from_secs(self.list_ttl_secs)
    }
}

/// Remote catalog settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL without the API key segment or trailing slash
    pub base_url: String,
    /// API key inserted as the first path segment
    pub api_key: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Response cache settings
    pub cache: CatalogCacheConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: catalog::DEFAULT_BASE_URL.to_owned(),
            api_key: catalog::DEFAULT_API_KEY.to_owned(),
            request_timeout_secs: catalog::DEFAULT_REQUEST_TIMEOUT_SECS,
            cache: CatalogCacheConfig::default(),
        }
    }
}

impl CatalogConfig {
    /// Per-request timeout
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// URL of `endpoint` under this catalog
    #[must_use]
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}/{endpoint}", self.base_url, self.api_key)
    }
}

/// Search and suggestion settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Delay before a search-as-you-type query is sent, in milliseconds
    pub debounce_ms: u64,
    /// Random drinks shown before the user searches
    pub random_count: usize,
    /// "Just for you" list length
    pub recommendation_count: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: search::DEFAULT_DEBOUNCE_MS,
            random_count: search::DEFAULT_RANDOM_DRINKS,
            recommendation_count: search::DEFAULT_RECOMMENDATIONS,
        }
    }
}

impl SearchConfig {
    /// Debounce delay
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarkeepConfig {
    /// Remote catalog
    pub catalog: CatalogConfig,
    /// Search behaviour
    pub search: SearchConfig,
}

impl BarkeepConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a variable is set but cannot be parsed,
    /// the catalog URL is not an absolute http(s) URL, or a count is zero
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            catalog: CatalogConfig {
                base_url: parse_base_url(&env_var_or(ENV_CATALOG_URL, catalog::DEFAULT_BASE_URL))?,
                api_key: env_var_or(ENV_API_KEY, catalog::DEFAULT_API_KEY),
                request_timeout_secs: parse_env(
                    ENV_REQUEST_TIMEOUT_SECS,
                    catalog::DEFAULT_REQUEST_TIMEOUT_SECS,
                )?,
                cache: CatalogCacheConfig {
                    max_entries: parse_env(ENV_CACHE_MAX_ENTRIES, cache::DEFAULT_CACHE_MAX_ENTRIES)?,
                    recipe_ttl_secs: parse_env(ENV_CACHE_TTL_RECIPE_SECS, cache::TTL_RECIPE_SECS)?,
                    list_ttl_secs: parse_env(ENV_CACHE_TTL_LIST_SECS, cache::TTL_LIST_SECS)?,
                },
            },
            search: SearchConfig {
                debounce_ms: parse_env(ENV_SEARCH_DEBOUNCE_MS, search::DEFAULT_DEBOUNCE_MS)?,
                random_count: parse_positive(ENV_RANDOM_COUNT, search::DEFAULT_RANDOM_DRINKS)?,
                recommendation_count: parse_positive(
                    ENV_RECOMMENDATION_COUNT,
                    search::DEFAULT_RECOMMENDATIONS,
                )?,
            },
        };

        info!(
            catalog.base_url = %config.catalog.base_url,
            catalog.timeout_secs = config.catalog.request_timeout_secs,
            cache.max_entries = config.catalog.cache.max_entries,
            search.debounce_ms = config.search.debounce_ms,
            "Configuration loaded"
        );
        Ok(config)
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e| {
            AppError::config_invalid(format!("Invalid {key} value '{raw}': {e}"))
        }),
        Err(_) => Ok(default),
    }
}

fn parse_positive(key: &str, default: usize) -> AppResult<usize> {
    let value = parse_env(key, default)?;
    if value == 0 {
        return Err(AppError::config_invalid(format!("{key} must be at least 1")));
    }
    Ok(value)
}

fn parse_base_url(raw: &str) -> AppResult<String> {
    let url = Url::parse(raw)
        .map_err(|e| AppError::config_invalid(format!("Invalid {ENV_CATALOG_URL} '{raw}': {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::config_invalid(format!(
            "{ENV_CATALOG_URL} must use http or https, got '{}'",
            url.scheme()
        )));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_inserts_api_key() {
        let config = CatalogConfig::default();
        assert_eq!(
            config.endpoint_url("lookup.php"),
            "https://www.thecocktaildb.com/api/json/v1/1/lookup.php"
        );
    }

    #[test]
    fn test_base_url_validation() {
        assert_eq!(
            parse_base_url("http://localhost:8080/api/").unwrap(),
            "http://localhost:8080/api"
        );
        assert!(parse_base_url("ftp://example.com").is_err());
        assert!(parse_base_url("not a url").is_err());
    }

    #[test]
    fn test_defaults() {
        let config = BarkeepConfig::default();
        assert_eq!(config.search.debounce(), Duration::from_millis(500));
        assert_eq!(config.catalog.api_key, "1");
        assert_eq!(config.catalog.cache.list_ttl(), Duration::from_secs(86_400));
    }
}
