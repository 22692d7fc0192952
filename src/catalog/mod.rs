// ABOUTME: Read-only cocktail catalog abstraction and its implementations
// ABOUTME: CatalogProvider trait, TheCocktailDB HTTP client, and an in-memory catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

//! # Cocktail Catalog
//!
//! The catalog is owned by a third party and only ever read. Every method
//! may fail transiently; failures surface as [`AppError`](crate::errors::AppError)
//! values whose code tells the caller whether a retry makes sense.
//!
//! List endpoints (by category, by ingredient) return recipe summaries with
//! only the id, name, and thumbnail set. Use
//! [`CatalogProvider::get_recipe_by_id`] for the full record.

use async_trait::async_trait;
use barkeep_intelligence::filtering::unique_by_id;

use crate::errors::{AppError, AppResult};
use crate::models::Recipe;

/// TheCocktailDB HTTP client with response caching
pub mod cocktaildb;
/// Catalog held in memory, for tests and offline use
pub mod memory;
/// JSON wire format of TheCocktailDB
pub mod wire;

pub use cocktaildb::CocktailDbClient;
pub use memory::InMemoryCatalog;

/// Read-only access to a cocktail catalog
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Full recipe by catalog id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when no recipe has this id, or an
    /// external-service error when the catalog cannot be reached
    async fn get_recipe_by_id(&self, id: &str) -> AppResult<Recipe>;

    /// Recipe summaries in `category`
    ///
    /// # Errors
    ///
    /// Returns an external-service error when the catalog cannot be reached
    async fn list_recipes_by_category(&self, category: &str) -> AppResult<Vec<Recipe>>;

    /// Recipe summaries using `ingredient`
    ///
    /// # Errors
    ///
    /// Returns an external-service error when the catalog cannot be reached
    async fn list_recipes_by_ingredient(&self, ingredient: &str) -> AppResult<Vec<Recipe>>;

    /// Full recipes whose name matches `text`; no match is an empty list
    ///
    /// # Errors
    ///
    /// Returns an external-service error when the catalog cannot be reached
    async fn search_recipes_by_name(&self, text: &str) -> AppResult<Vec<Recipe>>;

    /// Every ingredient name the catalog knows
    ///
    /// # Errors
    ///
    /// Returns an external-service error when the catalog cannot be reached
    async fn list_all_ingredients(&self) -> AppResult<Vec<String>>;

    /// Every category name
    ///
    /// # Errors
    ///
    /// Returns an external-service error when the catalog cannot be reached
    async fn list_all_categories(&self) -> AppResult<Vec<String>>;

    /// Every glass type
    ///
    /// # Errors
    ///
    /// Returns an external-service error when the catalog cannot be reached
    async fn list_all_glass_types(&self) -> AppResult<Vec<String>>;

    /// One random full recipe
    ///
    /// # Errors
    ///
    /// Returns an external-service error when the catalog cannot be reached,
    /// or `ResourceNotFound` when the catalog is empty
    async fn random_recipe(&self) -> AppResult<Recipe>;

    /// Up to `count` distinct random recipes
    ///
    /// Duplicate draws are dropped, so fewer than `count` recipes may be
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `count` is zero, otherwise the first
    /// failure of [`CatalogProvider::random_recipe`]
    async fn random_recipes(&self, count: usize) -> AppResult<Vec<Recipe>> {
        if count == 0 {
            return Err(AppError::invalid_input(
                "Random recipe count must be at least 1",
            ));
        }
        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            drawn.push(self.random_recipe().await?);
        }
        Ok(unique_by_id(drawn))
    }
}
