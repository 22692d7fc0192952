// ABOUTME: TheCocktailDB REST client implementing CatalogProvider
// ABOUTME: Maps HTTP failures onto AppError codes and caches recipes and lists with LRU/TTL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

//! TheCocktailDB API client
//!
//! The free tier uses the API key `1` as a path segment:
//! `https://www.thecocktaildb.com/api/json/v1/1/lookup.php?i=11007`.
//!
//! # Features
//! - Full recipes cached for six hours, lists for a day (configurable)
//! - Search results warm the recipe cache
//! - Random draws are never cached
//!
//! # Example
//! ```rust,no_run
//! use barkeep::catalog::{CatalogProvider, CocktailDbClient};
//! use barkeep::config::CatalogConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CocktailDbClient::new(CatalogConfig::default())?;
//! let margarita = client.get_recipe_by_id("11007").await?;
//! println!("{} ({} ingredients)", margarita.name, margarita.ingredients.len());
//! # Ok(())
//! # }
//! ```

use std::time::Instant;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::wire::{parse_records, CategoryEntry, DrinkRecord, GlassEntry, IngredientEntry};
use super::CatalogProvider;
use crate::cache::TtlCache;
use crate::config::CatalogConfig;
use crate::constants::catalog::endpoints;
use crate::constants::service_names::COCKTAIL_DB;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::Recipe;

/// Cache keys for the name lists
mod list_keys {
    pub const INGREDIENTS: &str = "ingredients";
    pub const CATEGORIES: &str = "categories";
    pub const GLASSES: &str = "glasses";
}

/// TheCocktailDB client
pub struct CocktailDbClient {
    config: CatalogConfig,
    http_client: Client,
    recipe_cache: TtlCache<String, Recipe>,
    list_cache: TtlCache<String, Vec<Recipe>>,
    name_cache: TtlCache<&'static str, Vec<String>>,
}

impl CocktailDbClient {
    /// Create a client for `config`
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built
    pub fn new(config: CatalogConfig) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(concat!("barkeep/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")).with_source(e))?;

        let capacity = config.cache.max_entries;
        Ok(Self {
            recipe_cache: TtlCache::new(capacity, config.cache.recipe_ttl()),
            list_cache: TtlCache::new(capacity, config.cache.list_ttl()),
            name_cache: TtlCache::new(capacity, config.cache.list_ttl()),
            config,
            http_client,
        })
    }

    /// Client configuration
    #[must_use]
    pub const fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Clear all caches
    pub async fn clear_caches(&self) {
        self.recipe_cache.clear().await;
        self.list_cache.clear().await;
        self.name_cache.clear().await;
    }

    /// Number of cached (recipes, lists, name lists)
    pub async fn cache_stats(&self) -> (usize, usize, usize) {
        (
            self.recipe_cache.len().await,
            self.list_cache.len().await,
            self.name_cache.len().await,
        )
    }

    /// Request `endpoint` and decode its drinks envelope
    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> AppResult<Vec<T>> {
        let url = self.config.endpoint_url(endpoint);
        let started = Instant::now();

        let response = self.http_client.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(endpoint, status = status.as_u16(), "Catalog request rejected");
            return Err(status_error(status).with_details(serde_json::json!({
                "endpoint": endpoint,
                "status": status.as_u16(),
            })));
        }

        let body = response.text().await?;
        debug!(
            endpoint,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            bytes = body.len(),
            "Catalog request completed"
        );
        parse_records(&body)
    }

    async fn fetch_recipes(&self, endpoint: &str, query: &[(&str, &str)]) -> AppResult<Vec<Recipe>> {
        let records: Vec<DrinkRecord> = self.fetch(endpoint, query).await?;
        Ok(records.into_iter().map(Recipe::from).collect())
    }

    async fn cached_list(&self, key: String, endpoint: &str, query: &[(&str, &str)]) -> AppResult<Vec<Recipe>> {
        if let Some(hit) = self.list_cache.get(&key).await {
            debug!(cache.key = %key, "Catalog list cache hit");
            return Ok(hit);
        }
        let recipes = self.fetch_recipes(endpoint, query).await?;
        self.list_cache.insert(key, recipes.clone()).await;
        Ok(recipes)
    }

    async fn cached_names<T, F>(&self, key: &'static str, query: (&str, &str), name: F) -> AppResult<Vec<String>>
    where
        T: DeserializeOwned,
        F: Fn(T) -> String,
    {
        if let Some(hit) = self.name_cache.get(&key).await {
            return Ok(hit);
        }
        let entries: Vec<T> = self.fetch(endpoints::LIST, &[query]).await?;
        let names: Vec<String> = entries.into_iter().map(name).collect();
        info!(list = key, count = names.len(), "Loaded catalog name list");
        self.name_cache.insert(key, names.clone()).await;
        Ok(names)
    }
}

fn status_error(status: StatusCode) -> AppError {
    let message = format!("{COCKTAIL_DB}: HTTP {status}");
    if status == StatusCode::TOO_MANY_REQUESTS {
        AppError::new(ErrorCode::ExternalRateLimited, message)
    } else if status.is_server_error() {
        AppError::new(ErrorCode::ExternalServiceUnavailable, message)
    } else {
        AppError::new(ErrorCode::ExternalServiceError, message)
    }
}

#[async_trait]
impl CatalogProvider for CocktailDbClient {
    async fn get_recipe_by_id(&self, id: &str) -> AppResult<Recipe> {
        if let Some(hit) = self.recipe_cache.get(&id.to_owned()).await {
            return Ok(hit);
        }
        let recipe = self
            .fetch_recipes(endpoints::LOOKUP, &[("i", id)])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::not_found(format!("Recipe {id}")).with_resource_id(id))?;
        self.recipe_cache.insert(recipe.id.clone(), recipe.clone()).await;
        Ok(recipe)
    }

    async fn list_recipes_by_category(&self, category: &str) -> AppResult<Vec<Recipe>> {
        self.cached_list(format!("c:{category}"), endpoints::FILTER, &[("c", category)])
            .await
    }

    async fn list_recipes_by_ingredient(&self, ingredient: &str) -> AppResult<Vec<Recipe>> {
        self.cached_list(format!("i:{ingredient}"), endpoints::FILTER, &[("i", ingredient)])
            .await
    }

    async fn search_recipes_by_name(&self, text: &str) -> AppResult<Vec<Recipe>> {
        let recipes = self
            .cached_list(format!("s:{text}"), endpoints::SEARCH, &[("s", text)])
            .await?;
        for recipe in &recipes {
            self.recipe_cache.insert(recipe.id.clone(), recipe.clone()).await;
        }
        Ok(recipes)
    }

    async fn list_all_ingredients(&self) -> AppResult<Vec<String>> {
        self.cached_names(list_keys::INGREDIENTS, ("i", "list"), |e: IngredientEntry| e.name)
            .await
    }

    async fn list_all_categories(&self) -> AppResult<Vec<String>> {
        self.cached_names(list_keys::CATEGORIES, ("c", "list"), |e: CategoryEntry| e.name)
            .await
    }

    async fn list_all_glass_types(&self) -> AppResult<Vec<String>> {
        self.cached_names(list_keys::GLASSES, ("g", "list"), |e: GlassEntry| e.name)
            .await
    }

    async fn random_recipe(&self) -> AppResult<Recipe> {
        self.fetch_recipes(endpoints::RANDOM, &[])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::not_found("Random recipe"))
    }
}
