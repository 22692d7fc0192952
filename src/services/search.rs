// ABOUTME: Drink search by name, debounced search-as-you-type, and ingredient suggestions
// ABOUTME: Blank queries fall back to random drinks or a random ingredient sample
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use std::sync::Arc;

use barkeep_intelligence::ingredient_search;
use tracing::{debug, instrument};

use crate::catalog::CatalogProvider;
use crate::config::SearchConfig;
use crate::debounce::Debouncer;
use crate::errors::AppResult;
use crate::models::Recipe;

/// Drinks matching `query` by name
///
/// A blank query returns up to `random_count` random drinks instead.
///
/// # Errors
///
/// Returns the first catalog failure, or `InvalidInput` for a blank query
/// with a zero `random_count`
#[instrument(skip(catalog))]
pub async fn search_drinks(
    catalog: &dyn CatalogProvider,
    query: &str,
    random_count: usize,
) -> AppResult<Vec<Recipe>> {
    let query = query.trim();
    if query.is_empty() {
        debug!("Blank query; showing random drinks");
        return catalog.random_recipes(random_count).await;
    }
    catalog.search_recipes_by_name(query).await
}

/// Ingredient picker suggestions for `query`
///
/// # Errors
///
/// Returns the catalog failure when the ingredient list cannot be loaded
#[instrument(skip(catalog))]
pub async fn suggest_ingredients(
    catalog: &dyn CatalogProvider,
    query: &str,
) -> AppResult<Vec<String>> {
    let all = catalog.list_all_ingredients().await?;
    let mut rng = rand::thread_rng();
    Ok(ingredient_search::suggest_ingredients(&all, query, &mut rng)
        .into_iter()
        .map(str::to_owned)
        .collect())
}

/// Search-as-you-type: only the answer to the latest query is published
pub struct DrinkSearch {
    catalog: Arc<dyn CatalogProvider>,
    debouncer: Debouncer,
    random_count: usize,
}

impl DrinkSearch {
    /// Create a search box bound to `catalog`
    ///
    /// # Errors
    ///
    /// Returns an internal error when called outside a tokio runtime
    pub fn new(catalog: Arc<dyn CatalogProvider>, config: &SearchConfig) -> AppResult<Self> {
        Ok(Self {
            catalog,
            debouncer: Debouncer::new(config.debounce())?,
            random_count: config.random_count,
        })
    }

    /// Queue a search for `query`; `publish` receives the result unless a
    /// newer query supersedes it
    ///
    /// Returns the request generation.
    #[must_use]
    pub fn search_as_you_type<P>(&self, query: impl Into<String>, publish: P) -> u64
    where
        P: FnOnce(AppResult<Vec<Recipe>>) + Send + 'static,
    {
        let catalog = Arc::clone(&self.catalog);
        let query = query.into();
        let random_count = self.random_count;
        self.debouncer.schedule(
            async move { search_drinks(catalog.as_ref(), &query, random_count).await },
            publish,
        )
    }

    /// Drop the pending query
    pub fn cancel(&self) {
        self.debouncer.cancel();
    }

    /// Generation of the most recent query
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.debouncer.generation()
    }
}
